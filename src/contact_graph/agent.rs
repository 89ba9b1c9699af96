use{
    serde::{Serialize, Deserialize},
    crate::epidemic_model::InfectionState,
};

/// Rounds after infection before an agent shows symptoms.
/// Symptoms last until recovery.
pub const SYMPTOM_ONSET_TIME: u32 = 5;

/// One member of the population. Lives in the graph's arena and is referred
/// to by index everywhere else, so no agent state is ever duplicated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Agent{
    id: usize,
    group_number: usize,
    contacts: Vec<usize>,
    state: InfectionState,
    infection_time: u32,
    quarantined: bool,
}

impl Agent{
    pub fn new(id: usize, group_number: usize) -> Self
    {
        debug_assert!(group_number < crate::misc_types::NUM_GROUPS);
        Self{
            id,
            group_number,
            contacts: Vec::new(),
            state: InfectionState::Susceptible,
            infection_time: 0,
            quarantined: false,
        }
    }

    pub fn id(&self) -> usize
    {
        self.id
    }

    pub fn group_number(&self) -> usize
    {
        self.group_number
    }

    pub fn contacts(&self) -> &[usize]
    {
        &self.contacts
    }

    pub fn contact_count(&self) -> usize
    {
        self.contacts.len()
    }

    pub(crate) fn add_contact(&mut self, other: usize)
    {
        self.contacts.push(other);
    }

    pub fn state(&self) -> InfectionState
    {
        self.state
    }

    pub fn becomes_infected(&mut self, time: u32)
    {
        self.state = InfectionState::Infected;
        self.infection_time = time;
    }

    pub fn recovers(&mut self)
    {
        self.state = InfectionState::Recovered;
    }

    pub fn infection_time(&self) -> u32
    {
        self.infection_time
    }

    pub fn quarantine(&mut self)
    {
        self.quarantined = true;
    }

    pub fn unquarantine(&mut self)
    {
        self.quarantined = false;
    }

    pub fn is_quarantined(&self) -> bool
    {
        self.quarantined
    }

    pub fn is_susceptible(&self) -> bool
    {
        self.state.sus_check()
    }

    /// Contagious for the whole infected period. The simulation moves the
    /// agent to recovered exactly when the infectious window closes.
    pub fn is_contagious(&self, time: u32) -> bool
    {
        self.state.inf_check() && time >= self.infection_time
    }

    pub fn is_symptomatic(&self, time: u32) -> bool
    {
        self.state.inf_check() && time >= self.infection_time + SYMPTOM_ONSET_TIME
    }

    /// Back to a fresh susceptible agent. Topology and group stay.
    pub fn reset(&mut self)
    {
        self.state = InfectionState::Susceptible;
        self.infection_time = 0;
        self.quarantined = false;
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn infection_timeline()
    {
        let mut agent = Agent::new(0, 3);
        assert!(agent.is_susceptible());
        assert!(!agent.is_contagious(0));
        assert!(!agent.is_symptomatic(0));

        agent.becomes_infected(2);
        assert!(!agent.is_susceptible());
        assert!(agent.is_contagious(2));
        assert!(!agent.is_symptomatic(2));
        assert!(!agent.is_symptomatic(2 + SYMPTOM_ONSET_TIME - 1));
        assert!(agent.is_symptomatic(2 + SYMPTOM_ONSET_TIME));

        agent.recovers();
        assert!(!agent.is_contagious(20));
        assert!(!agent.is_symptomatic(20));
    }

    #[test]
    fn reset_keeps_topology()
    {
        let mut agent = Agent::new(7, 1);
        agent.add_contact(3);
        agent.becomes_infected(5);
        agent.quarantine();
        agent.reset();
        assert!(agent.is_susceptible());
        assert!(!agent.is_quarantined());
        assert_eq!(agent.contacts(), &[3]);
        assert_eq!(agent.group_number(), 1);
    }
}
