/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `2+3 = 5`
    AddConstants,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `2*3 = 6`
    MultiplyConstants,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `0^a = 0`
    PowerZeroLeft,

    /// `1^a = 1`
    PowerOneLeft,

    /// `2^3 = 8`
    PowerConstants,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = match self {
            Self::AddZero => "a+0 = a",
            Self::AddConstants => "fold constant sum",
            Self::MultiplyZero => "a*0 = 0",
            Self::MultiplyOne => "a*1 = a",
            Self::MultiplyConstants => "fold constant product",
            Self::PowerZero => "a^0 = 1",
            Self::PowerOne => "a^1 = a",
            Self::PowerZeroLeft => "0^a = 0",
            Self::PowerOneLeft => "1^a = 1",
            Self::PowerConstants => "fold constant power",
        };
        write!(f, "{}", rule)
    }
}
