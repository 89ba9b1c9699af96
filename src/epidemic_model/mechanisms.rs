use{
    serde::{Serialize, Deserialize},
    std::str::FromStr,
    crate::misc_types::SirError,
};

/// The quarantine mechanisms a simulation can switch on.
/// A closed set, so a typo in a config is an error instead of a
/// silently ignored string.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mechanism{
    RandomQuarantine,
    ScheduledQuarantine,
    SymptomaticQuarantine,
    HighContactTargeting,
}

impl Mechanism{
    /// short tag for file names
    pub fn tag(self) -> &'static str
    {
        match self{
            Self::RandomQuarantine => "rq",
            Self::ScheduledQuarantine => "sq",
            Self::SymptomaticQuarantine => "sy",
            Self::HighContactTargeting => "hc",
        }
    }
}

impl FromStr for Mechanism{
    type Err = SirError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s{
            "random quarantine" => Ok(Self::RandomQuarantine),
            "scheduled quarantine" => Ok(Self::ScheduledQuarantine),
            "symptomatic quarantine" => Ok(Self::SymptomaticQuarantine),
            "high-contact targeting" => Ok(Self::HighContactTargeting),
            other => Err(SirError::InvalidMechanismName(other.to_owned()))
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MechanismSet{
    random_quarantine: bool,
    scheduled_quarantine: bool,
    symptomatic_quarantine: bool,
    high_contact_targeting: bool,
}

impl MechanismSet{
    pub fn new(mechanisms: &[Mechanism]) -> Self
    {
        let mut set = Self::default();
        for mechanism in mechanisms{
            match mechanism{
                Mechanism::RandomQuarantine => set.random_quarantine = true,
                Mechanism::ScheduledQuarantine => set.scheduled_quarantine = true,
                Mechanism::SymptomaticQuarantine => set.symptomatic_quarantine = true,
                Mechanism::HighContactTargeting => set.high_contact_targeting = true,
            }
        }
        set
    }

    /// Build from the spelled-out names, rejecting anything unknown.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, SirError>
    {
        let mechanisms = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<Mechanism>, _>>()?;
        Ok(Self::new(&mechanisms))
    }

    pub fn random_quarantine(self) -> bool
    {
        self.random_quarantine
    }

    pub fn scheduled_quarantine(self) -> bool
    {
        self.scheduled_quarantine
    }

    pub fn symptomatic_quarantine(self) -> bool
    {
        self.symptomatic_quarantine
    }

    /// Accepted and recorded, but currently no transmission or quarantine
    /// rule consults it.
    pub fn high_contact_targeting(self) -> bool
    {
        self.high_contact_targeting
    }

    pub fn name(self) -> String
    {
        let mut tags: Vec<&str> = Vec::new();
        if self.random_quarantine{
            tags.push(Mechanism::RandomQuarantine.tag());
        }
        if self.scheduled_quarantine{
            tags.push(Mechanism::ScheduledQuarantine.tag());
        }
        if self.symptomatic_quarantine{
            tags.push(Mechanism::SymptomaticQuarantine.tag());
        }
        if self.high_contact_targeting{
            tags.push(Mechanism::HighContactTargeting.tag());
        }
        if tags.is_empty(){
            "none".to_owned()
        } else {
            tags.join("-")
        }
    }
}
