use serde::{Deserialize, Serialize};

/// Responsive width bucket, by screen width in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// < 576
    Xs,
    /// 576..768
    Sm,
    /// 768..992
    Md,
    /// 992..1200
    Lg,
    /// >= 1200
    Xl,
}

impl Breakpoint {
    pub fn from_width(width: u32) -> Self {
        match width {
            0..=575 => Self::Xs,
            576..=767 => Self::Sm,
            768..=991 => Self::Md,
            992..=1199 => Self::Lg,
            _ => Self::Xl,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "xs" => Some(Self::Xs),
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            "xl" => Some(Self::Xl),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_edges() {
        assert_eq!(Breakpoint::from_width(0), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(575), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(576), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(767), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(768), Breakpoint::Md);
        assert_eq!(Breakpoint::from_width(991), Breakpoint::Md);
        assert_eq!(Breakpoint::from_width(992), Breakpoint::Lg);
        assert_eq!(Breakpoint::from_width(1199), Breakpoint::Lg);
        assert_eq!(Breakpoint::from_width(1200), Breakpoint::Xl);
    }

    #[test]
    fn unknown_name() {
        assert_eq!(Breakpoint::from_str("md"), Some(Breakpoint::Md));
        assert_eq!(Breakpoint::from_str("xxl"), None);
    }
}
