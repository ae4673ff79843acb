//! Positional labels for naming synthesized sub-structures.

use chai_ids_ast::Operator;

/// Label for the operand at `position` under `operator`.
///
/// `⿰` gives 旁/边, `⿱` 头/底, `⿲` 旁/中/边, `⿳` 头/腰/底, and every
/// surrounding or overlaying operator 框/心. Positions past the operator's
/// arity get the last label.
pub fn suffix(operator: Operator, position: usize) -> char {
    let labels: &[char] = match operator {
        Operator::LeftToRight => &['旁', '边'],
        Operator::AboveToBelow => &['头', '底'],
        Operator::LeftToMiddleAndRight => &['旁', '中', '边'],
        Operator::AboveToMiddleAndBelow => &['头', '腰', '底'],
        _ => &['框', '心'],
    };
    labels[position.min(labels.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_labels() {
        assert_eq!(suffix(Operator::LeftToRight, 0), '旁');
        assert_eq!(suffix(Operator::LeftToRight, 1), '边');
        assert_eq!(suffix(Operator::AboveToBelow, 0), '头');
        assert_eq!(suffix(Operator::AboveToBelow, 1), '底');
    }

    #[test]
    fn test_ternary_labels() {
        let lr: String = (0..3).map(|i| suffix(Operator::LeftToMiddleAndRight, i)).collect();
        let tb: String = (0..3).map(|i| suffix(Operator::AboveToMiddleAndBelow, i)).collect();
        assert_eq!(lr, "旁中边");
        assert_eq!(tb, "头腰底");
    }

    #[test]
    fn test_surrounding_labels() {
        for op in [
            Operator::FullSurround,
            Operator::SurroundFromLowerLeft,
            Operator::Overlaid,
            Operator::Rotation,
        ] {
            assert_eq!(suffix(op, 0), '框');
            assert_eq!(suffix(op, 1), '心');
        }
    }
}
