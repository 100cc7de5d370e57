use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::Rng;

/// Fill a vector with `len` random values.
pub fn random_vec(len: usize, rng: &mut SmallRng) -> Vec<i64> {
    let mut vec = vec![0i64; len];
    rng.fill(&mut vec[..]);
    vec
}

/// Shape of the generated input data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputPattern {
    /// Uniformly random values.
    Random,
    /// Already sorted ascending.
    Sorted,
    /// Sorted descending.
    Reversed,
    /// Every element identical.
    Equal,
}

impl InputPattern {
    pub fn label(&self) -> &'static str {
        match self {
            InputPattern::Random => "random",
            InputPattern::Sorted => "sorted",
            InputPattern::Reversed => "reversed",
            InputPattern::Equal => "equal",
        }
    }

    pub fn generate(&self, len: usize, rng: &mut SmallRng) -> Vec<i64> {
        match self {
            InputPattern::Random => random_vec(len, rng),
            InputPattern::Sorted => {
                let mut vec = random_vec(len, rng);
                vec.sort_unstable();
                vec
            }
            InputPattern::Reversed => {
                let mut vec = random_vec(len, rng);
                vec.sort_unstable();
                vec.reverse();
                vec
            }
            InputPattern::Equal => vec![rng.gen(); len],
        }
    }
}

impl FromStr for InputPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(InputPattern::Random),
            "sorted" => Ok(InputPattern::Sorted),
            "reversed" => Ok(InputPattern::Reversed),
            "equal" => Ok(InputPattern::Equal),
            other => Err(format!(
                "unknown input pattern '{}' (expected random, sorted, reversed or equal)",
                other
            )),
        }
    }
}
