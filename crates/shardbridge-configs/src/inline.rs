//! Inline expression expansion for data node declarations.
//!
//! A table's physical placement can be written compactly as
//! `ds${0..1}.t_order_${0..1}` instead of listing every data node. Each
//! `${a..b}` segment expands to the inclusive integer range `a..=b`;
//! multiple segments expand as a cartesian product in left-to-right order,
//! which fixes the declared data node order.

/// Expands `${a..b}` range segments in an inline expression.
///
/// Expressions without any `${..}` segment expand to themselves. Segment
/// order determines output order: the leftmost segment varies slowest, so
/// `ds${0..1}.t_${0..1}` yields `ds0.t_0, ds0.t_1, ds1.t_0, ds1.t_1`.
pub fn expand_inline_expression(expression: &str) -> anyhow::Result<Vec<String>> {
    let mut result = vec![String::new()];
    let mut rest = expression;

    while let Some(open) = rest.find("${") {
        let (literal, tail) = rest.split_at(open);
        let close = tail
            .find('}')
            .ok_or_else(|| anyhow::anyhow!("Unclosed '${{' in inline expression '{}'", expression))?;
        let range = &tail[2..close];
        let (lo, hi) = parse_range(range, expression)?;

        let mut expanded = Vec::with_capacity(result.len() * (hi - lo + 1));
        for prefix in &result {
            for i in lo..=hi {
                expanded.push(format!("{}{}{}", prefix, literal, i));
            }
        }
        result = expanded;
        rest = &tail[close + 1..];
    }

    for value in &mut result {
        value.push_str(rest);
    }
    Ok(result)
}

fn parse_range(range: &str, expression: &str) -> anyhow::Result<(usize, usize)> {
    let (lo, hi) = range
        .split_once("..")
        .ok_or_else(|| anyhow::anyhow!("Expected 'a..b' range in inline expression '{}'", expression))?;
    let lo: usize = lo
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid range start '{}' in '{}'", lo, expression))?;
    let hi: usize = hi
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid range end '{}' in '{}'", hi, expression))?;
    if lo > hi {
        return Err(anyhow::anyhow!(
            "Range start {} exceeds end {} in '{}'",
            lo,
            hi,
            expression
        ));
    }
    Ok((lo, hi))
}
