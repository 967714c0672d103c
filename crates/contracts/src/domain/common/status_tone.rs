/// Visual tone of a status badge.
///
/// Every status enumeration maps onto this closed set with an exhaustive
/// `match`, so a new status value fails to compile until it is given a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Neutral,
    Warning,
    Success,
    Error,
    Muted,
}

impl StatusTone {
    /// BEM modifier used by the badge component (`badge--{modifier}`)
    pub fn modifier(&self) -> &'static str {
        match self {
            StatusTone::Neutral => "neutral",
            StatusTone::Warning => "warning",
            StatusTone::Success => "success",
            StatusTone::Error => "error",
            StatusTone::Muted => "muted",
        }
    }
}
