use{
    serde::{Serialize, Deserialize},
    rand::distributions::{Uniform, Distribution},
    rand_distr::Poisson,
    rand_pcg::Pcg64,
    std::{
        num::*,
    },
};

pub const DEFAULT_SYSTEM_SIZE: NonZeroUsize = unsafe{NonZeroUsize::new_unchecked(1000)};
pub const DEFAULT_RECOVERY_TIME: u32 = 14;
pub const DEFAULT_GRAPH_SEED: u64 = 875629289;
pub const DEFAULT_SIR_SEED: u64 = 1489264107025;
pub const DEFAULT_TARGET_GROWTH_RATE: f64 = 1.1;
pub const DEFAULT_THRESHOLD: f64 = 0.001;
pub const DEFAULT_MAX_ROUNDS: u32 = 100_000;
pub const DEFAULT_SAMPLES: u64 = 100;

/// Number of rotation cohorts for the scheduled quarantine.
pub const NUM_GROUPS: usize = 5;

/// How many desired contacts an agent gets during graph construction.
/// Sampled once per agent, never consulted again afterwards.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum ContactDistribution{
    Constant(usize),
    UniformRange(usize, usize),
    Poisson(f64),
}

impl ContactDistribution{
    pub fn sample(&self, rng: &mut Pcg64) -> usize
    {
        match self{
            Self::Constant(c) => *c,
            Self::UniformRange(low, high) => {
                Uniform::new_inclusive(*low, *high).sample(rng)
            },
            Self::Poisson(mean) => {
                let dist = Poisson::new(*mean)
                    .expect("poisson mean must be finite and positive");
                dist.sample(rng) as usize
            }
        }
    }

    pub fn name(&self) -> String
    {
        match self
        {
            Self::Constant(c) => format!("con{}", c),
            Self::UniformRange(low, high) => format!("uni{}-{}", low, high),
            Self::Poisson(mean) => format!("po{}", mean),
        }
    }
}

impl Default for ContactDistribution{
    fn default() -> Self{
        Self::Poisson(13.0)
    }
}

/// How the index cases are chosen when a simulation starts.
#[derive(Serialize, Deserialize, Clone, Debug, Copy)]
pub enum InitialInfection{
    /// every agent is independently infected with this probability
    Random(f64),
    /// exactly this many agents, drawn uniformly without replacement
    Exact(usize),
}

impl InitialInfection{
    pub fn name(&self) -> String
    {
        match self{
            Self::Random(p0) => format!("rnd{}", p0),
            Self::Exact(k) => format!("pz{}", k),
        }
    }
}

impl Default for InitialInfection{
    fn default() -> Self{
        Self::Exact(1)
    }
}
