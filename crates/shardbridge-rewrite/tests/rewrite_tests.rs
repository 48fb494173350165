//! Integration tests: routing plus rewriting end to end.

use shardbridge_commons::{
    ColumnName, Span, SqlValue, StatementContext, StatementKind, TableName,
};
use shardbridge_rewrite::{ColumnMap, SqlRewriteEngine, Token};
use shardbridge_route::{
    route, GeneratedKey, RouteUnit, ShardingRule, TableMetas, TableUnit,
};

fn rule() -> ShardingRule {
    let config = shardbridge_configs::ShardingRuleConfig::from_toml_str(
        r#"
[tables.t_order]
actual_data_nodes = ["ds0.t_order_0", "ds1.t_order_1"]
key_generate_column = "order_id"
sharding_column = "user_id"
sharding_algorithm = { type = "mod" }

[tables.t_order.encrypt_columns.remark]
cipher_column = "remark_cipher"
plain_column = "remark_plain"
"#,
    )
    .unwrap();
    ShardingRule::from_config(&config).unwrap()
}

/// `insert into t_order(user_id,status) values(?,?)` with generated key
/// column `order_id`: the column list gains `,order_id` before the closing
/// parenthesis and the parameter list gains the generated value at the key's
/// positional slot.
#[test]
fn test_keyed_insert_rewrite() {
    let sql = "insert into t_order(user_id,status) values(?,?)";
    let ctx = StatementContext::new(StatementKind::Insert)
        .push_table("t_order", Span::new(12, 18))
        .with_insert_columns(
            Span::new(19, 34),
            vec![ColumnName::new("user_id"), ColumnName::new("status")],
        )
        .push_condition("user_id", vec![3])
        .push_parameter_group(vec![SqlValue::Int(3), SqlValue::Text("init".into())]);

    let rule = rule();
    let route_result = route(&rule, &TableMetas::default(), &ctx).unwrap();
    assert_eq!(route_result.len(), 1);

    let key = GeneratedKey::create(&rule, &ctx).unwrap();
    let engine = SqlRewriteEngine::new(sql, &ctx, ColumnMap::default());
    let units = engine.rewrite(&route_result, Some(&key)).unwrap();

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].data_source.as_str(), "ds1");
    assert_eq!(
        units[0].sql,
        "insert into t_order_1(user_id,status,order_id) values(?,?)"
    );
    assert_eq!(
        units[0].parameters,
        vec![
            SqlValue::Int(3),
            SqlValue::Text("init".into()),
            SqlValue::Int(key.generated_values()[0]),
        ]
    );
}

/// `insert into t_order values(?,?)` has no explicit column list, so the
/// generated-key column generator must not fire and no key is generated.
#[test]
fn test_implicit_column_list_generates_nothing() {
    let sql = "insert into t_order values(?,?,?)";
    let ctx = StatementContext::new(StatementKind::Insert)
        .push_table("t_order", Span::new(12, 18))
        .push_condition("user_id", vec![2])
        .push_parameter_group(vec![
            SqlValue::Int(10),
            SqlValue::Int(2),
            SqlValue::Text("init".into()),
        ]);

    let rule = rule();
    assert!(GeneratedKey::create(&rule, &ctx).is_none());

    let route_result = route(&rule, &TableMetas::default(), &ctx).unwrap();
    let engine = SqlRewriteEngine::new(sql, &ctx, ColumnMap::default());
    let units = engine.rewrite(&route_result, None).unwrap();
    assert_eq!(units[0].sql, "insert into t_order_0 values(?,?,?)");
    assert_eq!(units[0].parameters.len(), 3);
}

/// Cipher column substitution rewrites the logical label through the
/// statement's column map.
#[test]
fn test_cipher_column_substitution() {
    let sql = "select remark from t_order where user_id = ?";
    let ctx = StatementContext::new(StatementKind::Select)
        .push_column("remark", Span::new(7, 12))
        .push_table("t_order", Span::new(19, 25))
        .push_condition("user_id", vec![0])
        .push_parameter_group(vec![SqlValue::Int(0)]);

    let rule = rule();
    let column_map = ColumnMap::new(rule.encrypt_rule(), &ctx.table_names(), true);
    let route_result = route(&rule, &TableMetas::default(), &ctx).unwrap();
    let units = SqlRewriteEngine::new(sql, &ctx, column_map)
        .rewrite(&route_result, None)
        .unwrap();

    assert_eq!(
        units[0].sql,
        "select remark_cipher from t_order_0 where user_id = ?"
    );
}

/// Plain-column mode maps the same logical label to the plain column.
#[test]
fn test_plain_column_substitution() {
    let rule = rule();
    let map = ColumnMap::new(rule.encrypt_rule(), &[TableName::new("t_order")], false);
    assert_eq!(map.actual_label("remark"), "remark_plain");
    assert_eq!(map.actual_label("status"), "status");
}

/// Two tokens at different positions apply in ascending order with the
/// prefix preserved verbatim, regardless of generator invocation order.
#[test]
fn test_tokens_apply_in_source_order() {
    //        0123456789012345678901234567890
    let sql = "update t_order set remark = ?";
    let ctx = StatementContext::new(StatementKind::Update)
        .push_column("remark", Span::new(19, 24))
        .push_table("t_order", Span::new(7, 13))
        .push_condition("user_id", vec![1])
        .push_parameter_group(vec![SqlValue::Text("x".into())]);

    let rule = rule();
    let column_map = ColumnMap::new(rule.encrypt_rule(), &ctx.table_names(), true);
    let route_result = route(&rule, &TableMetas::default(), &ctx).unwrap();
    let units = SqlRewriteEngine::new(sql, &ctx, column_map)
        .rewrite(&route_result, None)
        .unwrap();

    assert_eq!(units[0].sql, "update t_order_1 set remark_cipher = ?");
    assert!(units[0].sql.starts_with("update "));
}

/// Identical inputs must reproduce byte-identical output across calls.
#[test]
fn test_rewrite_is_deterministic() {
    let sql = "select remark from t_order where user_id = ?";
    let ctx = StatementContext::new(StatementKind::Select)
        .push_column("remark", Span::new(7, 12))
        .push_table("t_order", Span::new(19, 25))
        .push_condition("user_id", vec![5])
        .push_parameter_group(vec![SqlValue::Int(5)]);

    let rule = rule();
    let column_map = ColumnMap::new(rule.encrypt_rule(), &ctx.table_names(), true);
    let route_result = route(&rule, &TableMetas::default(), &ctx).unwrap();

    let engine = SqlRewriteEngine::new(sql, &ctx, column_map);
    let first = engine.rewrite(&route_result, None).unwrap();
    for _ in 0..5 {
        assert_eq!(engine.rewrite(&route_result, None).unwrap(), first);
    }
}

/// A statement rewrites once per destination when routing broadcasts.
#[test]
fn test_broadcast_rewrites_per_destination() {
    let sql = "delete from t_order";
    let ctx = StatementContext::new(StatementKind::Delete).push_table("t_order", Span::new(12, 18));

    let rule = rule();
    let route_result = route(&rule, &TableMetas::default(), &ctx).unwrap();
    assert_eq!(route_result.len(), 2);

    let units = SqlRewriteEngine::new(sql, &ctx, ColumnMap::default())
        .rewrite(&route_result, None)
        .unwrap();
    assert_eq!(units[0].sql, "delete from t_order_0");
    assert_eq!(units[1].sql, "delete from t_order_1");
}

/// Overlapping tokens on one destination are a programming error.
#[test]
#[should_panic(expected = "overlapping token ranges")]
fn test_overlapping_tokens_panic() {
    // Two table references whose spans overlap cannot come from a real
    // parser; simulate the broken generator output directly.
    let sql = "select * from t_order";
    let ctx = StatementContext::new(StatementKind::Select)
        .push_table("t_order", Span::new(14, 20))
        .push_table("t_order", Span::new(18, 20));

    let unit = RouteUnit::new("ds0").with_table_unit(TableUnit::new("t_order", "t_order_0"));
    let route_result = shardbridge_route::RouteResult::new(vec![unit]);
    let _ = SqlRewriteEngine::new(sql, &ctx, ColumnMap::default()).rewrite(&route_result, None);
}

/// Tokens addressing bytes beyond the statement surface as an error, not a
/// truncated rewrite.
#[test]
fn test_out_of_bounds_token_is_error() {
    let sql = "select * from t";
    let ctx = StatementContext::new(StatementKind::Select).push_table("t_order", Span::new(14, 20));
    let unit = RouteUnit::new("ds0").with_table_unit(TableUnit::new("t_order", "t_order_0"));
    let route_result = shardbridge_route::RouteResult::new(vec![unit]);
    let result = SqlRewriteEngine::new(sql, &ctx, ColumnMap::default()).rewrite(&route_result, None);
    assert!(result.is_err());
}

#[test]
fn test_token_ordering_key() {
    let replace = Token::Replace {
        span: Span::new(10, 15),
        text: "x".into(),
    };
    let insert = Token::Insert {
        position: 25,
        text: "y".into(),
    };
    assert!(replace.start() < insert.start());
    assert_eq!(replace.stop(), Some(15));
    assert_eq!(insert.stop(), None);
}
