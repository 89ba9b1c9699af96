use{
    serde::{Serialize, Deserialize},
    rand::distributions::{Uniform, Distribution},
    rand_pcg::Pcg64,
    std::{
        fs::File,
        io::{BufReader, BufWriter},
        path::Path,
    },
    super::agent::Agent,
    crate::misc_types::*,
};

/// The population and who meets whom. Owns every agent in one arena;
/// edges are index pairs mirrored into both agents' contact lists.
/// The simulation clones this per trial and mutates only agent state,
/// never the topology.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactGraph{
    agents: Vec<Agent>,
}

impl ContactGraph{
    /// Fresh graph: every agent samples a desired contact count from the
    /// distribution, then draws uniform partners until it reaches that
    /// count or runs out of attempts. Groups are assigned here, once,
    /// and stay fixed for the graph's lifetime.
    pub fn from_distribution(
        n: usize,
        distribution: &ContactDistribution,
        rng: &mut Pcg64
    ) -> Self
    {
        assert!(n > 1, "contact graph needs at least two agents");
        let group_dist = Uniform::new(0, NUM_GROUPS);
        let mut agents: Vec<_> = (0..n)
            .map(|id| Agent::new(id, group_dist.sample(rng)))
            .collect();

        let partner_dist = Uniform::new(0, n);
        // enough attempts to satisfy reasonable degrees, finite so an
        // oversized request cannot loop forever
        let attempt_limit = 10 * n;
        for id in 0..n{
            let wanted = distribution.sample(rng).min(n - 1);
            let mut attempts = 0;
            while agents[id].contact_count() < wanted && attempts < attempt_limit{
                attempts += 1;
                let partner = partner_dist.sample(rng);
                if partner == id || agents[id].contacts().contains(&partner){
                    continue;
                }
                agents[id].add_contact(partner);
                agents[partner].add_contact(id);
            }
        }
        Self{agents}
    }

    /// Every pair connected. Handy for degenerate scenarios where each
    /// contact attempt at transmission probability 1 must transmit.
    pub fn complete(n: usize, rng: &mut Pcg64) -> Self
    {
        assert!(n > 1, "contact graph needs at least two agents");
        let group_dist = Uniform::new(0, NUM_GROUPS);
        let mut agents: Vec<_> = (0..n)
            .map(|id| Agent::new(id, group_dist.sample(rng)))
            .collect();
        for i in 0..n{
            for j in (i + 1)..n{
                agents[i].add_contact(j);
                agents[j].add_contact(i);
            }
        }
        Self{agents}
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SirError>
    {
        let display = path.as_ref().display().to_string();
        let file = File::open(&path)
            .map_err(|e| SirError::NetworkLoad{path: display.clone(), reason: e.to_string()})?;
        let buf = BufReader::new(file);
        bincode::deserialize_from(buf)
            .map_err(|e| SirError::NetworkLoad{path: display, reason: e.to_string()})
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SirError>
    {
        let display = path.as_ref().display().to_string();
        let file = File::create(&path)
            .map_err(|e| SirError::NetworkSave{path: display.clone(), reason: e.to_string()})?;
        let buf = BufWriter::new(file);
        bincode::serialize_into(buf, self)
            .map_err(|e| SirError::NetworkSave{path: display, reason: e.to_string()})
    }

    pub fn size(&self) -> usize
    {
        self.agents.len()
    }

    pub fn agent(&self, index: usize) -> &Agent
    {
        &self.agents[index]
    }

    pub fn agent_mut(&mut self, index: usize) -> &mut Agent
    {
        &mut self.agents[index]
    }

    pub fn agents(&self) -> impl Iterator<Item=&Agent>
    {
        self.agents.iter()
    }

    pub fn agents_mut(&mut self) -> impl Iterator<Item=&mut Agent>
    {
        self.agents.iter_mut()
    }

    pub fn edge_count(&self) -> usize
    {
        let degree_sum: usize = self.agents
            .iter()
            .map(Agent::contact_count)
            .sum();
        degree_sum / 2
    }

    pub fn mean_degree(&self) -> f64
    {
        if self.agents.is_empty(){
            return 0.0;
        }
        let degree_sum: usize = self.agents
            .iter()
            .map(Agent::contact_count)
            .sum();
        degree_sum as f64 / self.agents.len() as f64
    }
}
