use ca_rules::{ParseLife, ParseRuleError};

/// Birth and survival conditions of a totalistic life-like rule.
#[derive(Debug, PartialEq, Eq)]
struct Totalistic {
    birth: Vec<u8>,
    survival: Vec<u8>,
}

impl ParseLife for Totalistic {
    fn from_bs(mut b: Vec<u8>, mut s: Vec<u8>) -> Self {
        b.sort_unstable();
        b.dedup();
        s.sort_unstable();
        s.dedup();
        Totalistic {
            birth: b,
            survival: s,
        }
    }
}

/// The state of a cell in the next generation under B3/S23.
pub const fn next_state(alive: bool, live_neighbors: u8) -> bool {
    live_neighbors == 3 || (alive && live_neighbors == 2)
}

/// Whether `rulestring` describes Conway's Game of Life, in any notation
/// understood by `ca_rules`.
pub fn is_life(rulestring: &str) -> Result<bool, ParseRuleError> {
    let rule = Totalistic::parse_rule(rulestring)?;
    Ok(rule.birth == [3] && rule.survival == [2, 3])
}
