use{
    rand::distributions::{Uniform, Distribution},
    rand_pcg::Pcg64,
    crate::contact_graph::ContactGraph,
    crate::misc_types::*,
    super::*,
};

/// Bail out of seeding instead of spinning forever on a configuration
/// that can never infect anyone.
const MAX_SEED_ATTEMPTS: usize = 10_000;

/// One epidemic over one contact graph. Holds the graph by value (the
/// calibrator clones the shared graph per trial), the three compartment
/// partitions as index lists into the arena, and the rotation groups.
/// Only `round` mutates compartment state, so no caller can ever observe
/// a half applied round.
#[derive(Clone)]
pub struct EpidemicModel{
    graph: ContactGraph,
    trans_prob: f64,
    recovery_time: u32,
    mechanisms: MechanismSet,
    quarantine_prob: f64,
    // reserved for high-contact targeting, not consulted by any rule
    #[allow(dead_code)]
    contact_threshold: usize,
    time: u32,
    susceptible: Vec<usize>,
    infected: Vec<usize>,
    recovered: Vec<usize>,
    groups: [Vec<usize>; NUM_GROUPS],
    new_cases: Vec<usize>,
    max_rounds: u32,
    rng: Pcg64,
}

impl EpidemicModel{
    pub fn new(graph: ContactGraph, opt: EpidemicOptions, rng: Pcg64) -> Self
    {
        let mut model = Self{
            graph,
            trans_prob: opt.trans_prob,
            recovery_time: opt.recovery_time,
            mechanisms: opt.mechanisms,
            quarantine_prob: opt.quarantine_prob,
            contact_threshold: opt.contact_threshold,
            time: 0,
            susceptible: Vec::new(),
            infected: Vec::new(),
            recovered: Vec::new(),
            groups: Default::default(),
            new_cases: Vec::new(),
            max_rounds: opt.max_rounds,
            rng,
        };
        model.seed_infections(opt.initial_infection);
        if model.mechanisms.random_quarantine(){
            let prob_dist = Uniform::new_inclusive(0.0, 1.0);
            for id in 0..model.graph.size(){
                if prob_dist.sample(&mut model.rng) <= model.quarantine_prob{
                    model.graph.agent_mut(id).quarantine();
                }
            }
        }
        model.new_cases.push(model.infected.len());
        debug_assert!(model.partition_is_consistent());
        model
    }

    /// Seed the index cases, retrying the whole pass until at least one
    /// agent is infected. Every attempt resets agent state, the
    /// partitions and the group lists first, otherwise a retry would
    /// push agents into their group a second time.
    fn seed_infections(&mut self, initial: InitialInfection)
    {
        let n = self.graph.size();
        let prob_dist = Uniform::new_inclusive(0.0, 1.0);
        let index_dist = Uniform::new(0, n);
        let mut attempts = 0;
        loop{
            for agent in self.graph.agents_mut(){
                agent.reset();
            }
            self.susceptible = (0..n).collect();
            self.infected.clear();
            self.recovered.clear();
            self.groups.iter_mut().for_each(Vec::clear);

            let patient_zero = match initial{
                InitialInfection::Exact(k) => {
                    assert!(
                        k <= n,
                        "cannot seed {k} index cases into {n} agents"
                    );
                    let mut drawn: Vec<usize> = Vec::with_capacity(k);
                    while drawn.len() < k{
                        let index = index_dist.sample(&mut self.rng);
                        if !drawn.iter().any(|i| *i == index){
                            drawn.push(index);
                        }
                    }
                    drawn
                },
                InitialInfection::Random(_) => Vec::new(),
            };

            for id in 0..n{
                let infect = match initial{
                    InitialInfection::Random(p_initial) => {
                        prob_dist.sample(&mut self.rng) <= p_initial
                    },
                    InitialInfection::Exact(_) => patient_zero.contains(&id),
                };
                if infect{
                    self.graph.agent_mut(id).becomes_infected(0);
                    let pos = self.susceptible
                        .iter()
                        .position(|&s| s == id)
                        .expect("seeded agent was not susceptible");
                    self.susceptible.swap_remove(pos);
                    self.infected.push(id);
                }
                let group = self.graph.agent(id).group_number();
                self.groups[group].push(id);
            }

            if !self.infected.is_empty(){
                break;
            }
            attempts += 1;
            assert!(
                attempts < MAX_SEED_ATTEMPTS,
                "unable to seed a single infection with {initial:?}"
            );
        }
    }

    /// One discrete time step. Decisions are taken against the state the
    /// round starts with and committed as one batch, so an agent infected
    /// here neither transmits nor recovers before the next round.
    pub fn round(&mut self)
    {
        if self.mechanisms.scheduled_quarantine(){
            let group = self.time as usize % NUM_GROUPS;
            let previous = (group + NUM_GROUPS - 1) % NUM_GROUPS;
            for &id in &self.groups[group]{
                self.graph.agent_mut(id).quarantine();
            }
            for &id in &self.groups[previous]{
                self.graph.agent_mut(id).unquarantine();
            }
        }

        let time = self.time;
        let mut newly_infected: Vec<usize> = Vec::new();
        let mut newly_recovered: Vec<usize> = Vec::new();
        let current_infected = self.infected.clone();
        for &id in &current_infected{
            if time - self.graph.agent(id).infection_time() >= self.recovery_time{
                newly_recovered.push(id);
            }
            let contacts = self.graph.agent(id).contacts().to_vec();
            for contact in contacts{
                if self.transmission(id, contact)
                    && !newly_infected.contains(&contact){
                    newly_infected.push(contact);
                }
            }
            if self.mechanisms.symptomatic_quarantine()
                && self.graph.agent(id).is_symptomatic(time){
                self.graph.agent_mut(id).quarantine();
            }
        }

        for &id in &newly_infected{
            self.graph.agent_mut(id).becomes_infected(time);
            let pos = self.susceptible
                .iter()
                .position(|&s| s == id)
                .expect("newly infected agent was not susceptible");
            self.susceptible.swap_remove(pos);
            self.infected.push(id);
        }
        for &id in &newly_recovered{
            self.graph.agent_mut(id).recovers();
            let pos = self.infected
                .iter()
                .position(|&i| i == id)
                .expect("recovering agent was not infected");
            self.infected.swap_remove(pos);
            self.recovered.push(id);
        }

        self.time += 1;
        self.new_cases.push(newly_infected.len());
        debug_assert!(self.partition_is_consistent());
    }

    /// Can the infection jump this edge right now? Quarantine on either
    /// end blocks it; otherwise a Bernoulli draw with the transmission
    /// probability, but only from a contagious source into a susceptible
    /// target.
    fn transmission(&mut self, source: usize, target: usize) -> bool
    {
        let source = self.graph.agent(source);
        let target = self.graph.agent(target);
        if source.is_quarantined() || target.is_quarantined(){
            return false;
        }
        if source.is_contagious(self.time) && target.is_susceptible(){
            let prob_dist = Uniform::new_inclusive(0.0, 1.0);
            prob_dist.sample(&mut self.rng) <= self.trans_prob
        } else {
            false
        }
    }

    /// Positive round count: exactly that many rounds. Zero: run until
    /// the infection dies out, bounded by the max round safety limit.
    pub fn simulation(&mut self, num_rounds: u32)
    {
        if num_rounds > 0{
            for _ in 0..num_rounds{
                self.round();
            }
        } else {
            while !self.infected.is_empty() && self.time < self.max_rounds{
                self.round();
            }
        }
    }

    pub fn time(&self) -> u32
    {
        self.time
    }

    pub fn new_cases(&self) -> &[usize]
    {
        &self.new_cases
    }

    pub fn n_susceptible(&self) -> usize
    {
        self.susceptible.len()
    }

    pub fn n_infected(&self) -> usize
    {
        self.infected.len()
    }

    pub fn n_recovered(&self) -> usize
    {
        self.recovered.len()
    }

    pub fn is_extinct(&self) -> bool
    {
        self.infected.is_empty()
    }

    pub fn graph(&self) -> &ContactGraph
    {
        &self.graph
    }

    pub fn groups(&self) -> &[Vec<usize>; NUM_GROUPS]
    {
        &self.groups
    }

    /// The three partitions are pairwise disjoint, cover the arena, and
    /// agree with every agent's own state.
    pub fn partition_is_consistent(&self) -> bool
    {
        let n = self.graph.size();
        if self.susceptible.len() + self.infected.len() + self.recovered.len() != n{
            return false;
        }
        let mut seen = vec![0_u8; n];
        for &id in &self.susceptible{
            seen[id] += 1;
            if !self.graph.agent(id).state().sus_check(){
                return false;
            }
        }
        for &id in &self.infected{
            seen[id] += 1;
            if !self.graph.agent(id).state().inf_check(){
                return false;
            }
        }
        for &id in &self.recovered{
            seen[id] += 1;
            if !self.graph.agent(id).state().rec_check(){
                return false;
            }
        }
        seen.iter().all(|&count| count == 1)
    }
}

#[cfg(test)]
mod tests{
    use super::*;
    use rand::SeedableRng;

    fn options(trans_prob: f64, recovery_time: u32) -> EpidemicOptions
    {
        EpidemicOptions{
            trans_prob,
            recovery_time,
            mechanisms: MechanismSet::default(),
            quarantine_prob: 0.0,
            contact_threshold: 0,
            initial_infection: InitialInfection::Exact(1),
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    fn sir_rng() -> Pcg64
    {
        Pcg64::seed_from_u64(DEFAULT_SIR_SEED)
    }

    fn graph_rng() -> Pcg64
    {
        Pcg64::seed_from_u64(DEFAULT_GRAPH_SEED)
    }

    #[test]
    fn partition_and_monotonicity_hold_every_round()
    {
        let graph = ContactGraph::from_distribution(
            200,
            &ContactDistribution::UniformRange(2, 8),
            &mut graph_rng()
        );
        let mut model = EpidemicModel::new(graph, options(0.3, 5), sir_rng());
        assert!(model.partition_is_consistent());
        assert_eq!(model.new_cases()[0], 1);

        let mut previous_infected = model.n_infected();
        let mut previous_recovered = model.n_recovered();
        for _ in 0..30{
            model.round();
            assert!(model.partition_is_consistent());
            assert_eq!(
                model.n_susceptible() + model.n_infected() + model.n_recovered(),
                200
            );
            // recovered never shrinks
            assert!(model.n_recovered() >= previous_recovered);
            // infected(t+1) = infected(t) + newly infected - newly recovered
            let newly_infected = *model.new_cases().last().unwrap();
            let newly_recovered = model.n_recovered() - previous_recovered;
            assert_eq!(
                model.n_infected(),
                previous_infected + newly_infected - newly_recovered
            );
            previous_infected = model.n_infected();
            previous_recovered = model.n_recovered();
        }
    }

    #[test]
    fn full_spread_on_complete_graph_recovers_everyone()
    {
        let graph = ContactGraph::complete(10, &mut graph_rng());
        let mut model = EpidemicModel::new(graph, options(1.0, 14), sir_rng());
        model.simulation(0);
        assert!(model.is_extinct());
        assert_eq!(model.n_recovered(), 10);
        assert_eq!(model.n_susceptible(), 0);
        // patient zero infects all nine neighbors in the first round
        assert_eq!(model.new_cases()[0], 1);
        assert_eq!(model.new_cases()[1], 9);
    }

    #[test]
    fn agents_infected_in_a_round_do_not_recover_in_it()
    {
        // immediate recovery: everyone infected before this round recovers
        // in it, while agents infected during the round must survive to
        // the next one
        let graph = ContactGraph::complete(5, &mut graph_rng());
        let mut model = EpidemicModel::new(graph, options(1.0, 0), sir_rng());
        assert_eq!(model.n_infected(), 1);
        model.round();
        assert_eq!(model.n_recovered(), 1);
        assert_eq!(model.n_infected(), 4);
        assert_eq!(model.new_cases()[1], 4);
        model.round();
        assert_eq!(model.n_recovered(), 5);
        assert!(model.is_extinct());
    }

    #[test]
    fn exact_round_count_is_honored()
    {
        let graph = ContactGraph::complete(10, &mut graph_rng());
        let mut model = EpidemicModel::new(graph, options(1.0, 14), sir_rng());
        model.simulation(3);
        assert_eq!(model.time(), 3);
        // history: seed entry plus one entry per round
        assert_eq!(model.new_cases().len(), 4);
    }

    #[test]
    fn scheduled_quarantine_rotates_through_the_groups()
    {
        let graph = ContactGraph::from_distribution(
            100,
            &ContactDistribution::Constant(3),
            &mut graph_rng()
        );
        let mut opt = options(0.0, 50);
        opt.mechanisms = MechanismSet::new(&[Mechanism::ScheduledQuarantine]);
        let mut model = EpidemicModel::new(graph, opt, sir_rng());
        for round in 0..10_usize{
            model.round();
            let quarantined_group = round % NUM_GROUPS;
            for (group, members) in model.groups().clone().iter().enumerate(){
                for &id in members{
                    assert_eq!(
                        model.graph().agent(id).is_quarantined(),
                        group == quarantined_group,
                        "round {round}, group {group}"
                    );
                }
            }
        }
    }

    #[test]
    fn groups_partition_the_population_once()
    {
        let graph = ContactGraph::from_distribution(
            150,
            &ContactDistribution::Constant(4),
            &mut graph_rng()
        );
        let model = EpidemicModel::new(graph, options(0.5, 14), sir_rng());
        let mut seen = vec![0_u8; 150];
        for members in model.groups(){
            for &id in members{
                seen[id] += 1;
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn quarantine_blocks_all_transmission()
    {
        let graph = ContactGraph::complete(10, &mut graph_rng());
        let mut opt = options(1.0, 14);
        opt.mechanisms = MechanismSet::new(&[Mechanism::RandomQuarantine]);
        opt.quarantine_prob = 1.0;
        let mut model = EpidemicModel::new(graph, opt, sir_rng());
        model.simulation(0);
        // everyone was quarantined at construction, so only the index case
        // ever gets sick
        assert_eq!(model.n_recovered(), 1);
        assert_eq!(model.n_susceptible(), 9);
    }

    #[test]
    fn symptomatic_agents_are_quarantined_after_onset()
    {
        let graph = ContactGraph::complete(10, &mut graph_rng());
        let mut opt = options(0.0, 50);
        opt.mechanisms = MechanismSet::new(&[Mechanism::SymptomaticQuarantine]);
        let mut model = EpidemicModel::new(graph, opt, sir_rng());
        let patient_zero = model.infected[0];
        let onset = crate::contact_graph::SYMPTOM_ONSET_TIME;
        model.simulation(onset);
        assert!(!model.graph().agent(patient_zero).is_quarantined());
        model.round();
        assert!(model.graph().agent(patient_zero).is_quarantined());
    }

    #[test]
    fn random_seeding_retries_until_someone_is_infected()
    {
        let graph = ContactGraph::from_distribution(
            40,
            &ContactDistribution::Constant(3),
            &mut graph_rng()
        );
        let mut opt = options(0.2, 14);
        // tiny seeding probability, the retry loop has to work for this
        opt.initial_infection = InitialInfection::Random(0.001);
        let model = EpidemicModel::new(graph, opt, sir_rng());
        assert!(model.n_infected() >= 1);
        assert!(model.partition_is_consistent());
        let mut seen = vec![0_u8; 40];
        for members in model.groups(){
            for &id in members{
                seen[id] += 1;
            }
        }
        // a retried seeding pass must not duplicate group membership
        assert!(seen.iter().all(|&count| count == 1));
    }
}
