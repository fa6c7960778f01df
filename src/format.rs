use crate::solution::Solution;

/// Render a cover as two lines: the words, then their cost.
pub fn format_solution(solution: &Solution) -> String {
    if solution.is_empty() {
        return "(no words needed)\n".to_string();
    }
    let mut out = String::new();
    out.push_str(&solution.terms.join(" "));
    out.push('\n');
    out.push_str(&format!(
        "{} letter(s), {} word(s)",
        solution.cost.letters, solution.cost.words
    ));
    out.push('\n');
    out
}

/// One line of search counters, for verbose output.
pub fn format_stats(solution: &Solution) -> String {
    let stats = &solution.stats;
    format!(
        "nodes {} | pruned {} | improvements {} | greedy seed {}",
        stats.nodes,
        stats.pruned,
        stats.improvements,
        if stats.seeded { "yes" } else { "no" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Cost;
    use crate::solution::SearchStats;

    #[test]
    fn renders_terms_and_cost() {
        let sol = Solution {
            terms: vec!["wil".to_string(), "onion".to_string()],
            cost: Cost { letters: 8, words: 2 },
            stats: SearchStats {
                nodes: 7,
                pruned: 3,
                improvements: 1,
                seeded: true,
            },
        };
        assert_eq!(format_solution(&sol), "wil onion\n8 letter(s), 2 word(s)\n");
        assert_eq!(
            format_stats(&sol),
            "nodes 7 | pruned 3 | improvements 1 | greedy seed yes"
        );
    }

    #[test]
    fn empty_cover_has_a_placeholder() {
        assert_eq!(format_solution(&Solution::empty()), "(no words needed)\n");
    }
}
