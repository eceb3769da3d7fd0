use std::fmt;

use crate::tree::ast::ExprTree;

/// Format a leaf value, dropping the fractional part when it is integral.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

impl ExprTree {
    /// Render the tree as a top-down ASCII diagram.
    ///
    /// A leaf renders as a single line, its formatted value. An internal
    /// node renders its operator symbol centered over the combined width of
    /// the child renderings, followed by the children's lines concatenated
    /// side by side, one space between columns; a child shorter than its
    /// siblings is padded with blanks of its column width.
    pub fn render(&self, fmt_leaf: &impl Fn(f64) -> String) -> Vec<String> {
        match self {
            ExprTree::Leaf(value) => vec![fmt_leaf(*value)],
            ExprTree::Internal { op, children } => {
                let subtrees: Vec<Vec<String>> =
                    children.iter().map(|c| c.render(fmt_leaf)).collect();

                let widths: Vec<usize> = subtrees.iter().map(|s| s[0].len()).collect();
                let depth = subtrees.iter().map(Vec::len).max().unwrap_or(0);
                let width: usize = widths.iter().map(|w| w + 1).sum();

                let mut op_line = vec![b' '; width - 1];
                let pos = (width / 2).saturating_sub(1);
                op_line[pos] = op.symbol() as u8;

                let mut result = Vec::with_capacity(depth + 1);
                result.push(String::from_utf8_lossy(&op_line).into_owned());

                for d in 0..depth {
                    let mut line = String::new();
                    for (subtree, column_width) in subtrees.iter().zip(&widths) {
                        match subtree.get(d) {
                            Some(sub_line) => {
                                line.push_str(sub_line);
                                line.push(' ');
                            }
                            None => line.push_str(&" ".repeat(column_width + 1)),
                        }
                    }
                    result.push(line);
                }

                result
            }
        }
    }
}

impl fmt::Display for ExprTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lines = self.render(&format_value);
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
