//! Tone mapping for every status-like enumeration.
//!
//! Each match is exhaustive: adding a variant fails to compile until it is
//! given a tone, so no status can render unstyled.

use super::theme::{colors, Tone};
use crate::model::{
    AdaptiveLearning, AlertStatus, AnomalyStatus, MatchStatus, ReportStatus, RiskLevel, Severity,
    TransactionType, Variant, VerificationStatus,
};
use ratatui::prelude::*;

/// A value with a fixed semantic tone.
pub trait Toned {
    fn tone(&self) -> Tone;
}

impl Toned for Severity {
    fn tone(&self) -> Tone {
        match self {
            Self::Critical => Tone::Danger,
            Self::High => Tone::Warning,
            Self::Low => Tone::Success,
        }
    }
}

impl Toned for AnomalyStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Open => Tone::Info,
            Self::InProgress => Tone::Progress,
            Self::Closed => Tone::Success,
        }
    }
}

impl Toned for ReportStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Generated => Tone::Success,
            Self::InProgress => Tone::Progress,
            Self::Pending => Tone::Warning,
        }
    }
}

impl Toned for RiskLevel {
    fn tone(&self) -> Tone {
        match self {
            Self::High => Tone::Danger,
            Self::Medium => Tone::Warning,
            Self::Low => Tone::Success,
        }
    }
}

impl Toned for MatchStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::New => Tone::Info,
            Self::Review => Tone::Warning,
            Self::Closed => Tone::Neutral,
        }
    }
}

impl Toned for AlertStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Flagged => Tone::Danger,
            Self::Reviewed => Tone::Warning,
            Self::Cleared => Tone::Success,
        }
    }
}

impl Toned for TransactionType {
    fn tone(&self) -> Tone {
        match self {
            Self::Transfer | Self::Withdrawal => Tone::Info,
            Self::LoanApp => Tone::Progress,
            Self::MobileCharge => Tone::Neutral,
        }
    }
}

impl Toned for VerificationStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Verified => Tone::Success,
            Self::Pending => Tone::Info,
            Self::Rejected => Tone::Warning,
            Self::FraudAlert => Tone::Danger,
        }
    }
}

impl Toned for AdaptiveLearning {
    fn tone(&self) -> Tone {
        match self {
            Self::Active => Tone::Success,
            Self::Training => Tone::Progress,
            Self::Paused => Tone::Neutral,
        }
    }
}

/// Tone of a 0-100 risk-style score (higher is worse).
pub fn score_tone(score: f64) -> Tone {
    if score >= 90.0 {
        Tone::Danger
    } else if score >= 70.0 {
        Tone::Warning
    } else {
        Tone::Success
    }
}

/// Filled badge for a variant: ` Label ` on its tone color.
pub fn badge<V: Variant + Toned>(value: V) -> Span<'static> {
    let scheme = colors();
    let tone = value.tone();
    Span::styled(
        format!(" {} ", value.label()),
        Style::default()
            .fg(scheme.tone_badge_fg(tone))
            .bg(scheme.tone(tone))
            .bold(),
    )
}

/// Plain colored text in the value's tone.
pub fn toned_text(text: impl Into<String>, tone: Tone) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(colors().tone(tone)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgent_states_share_danger_tone() {
        assert_eq!(Severity::Critical.tone(), Tone::Danger);
        assert_eq!(RiskLevel::High.tone(), Tone::Danger);
        assert_eq!(AlertStatus::Flagged.tone(), Tone::Danger);
        assert_eq!(VerificationStatus::FraudAlert.tone(), Tone::Danger);
    }

    #[test]
    fn test_status_palette() {
        let cases = [
            (Severity::Critical.tone(), Tone::Danger),
            (Severity::High.tone(), Tone::Warning),
            (Severity::Low.tone(), Tone::Success),
            (AnomalyStatus::Open.tone(), Tone::Info),
            (AnomalyStatus::InProgress.tone(), Tone::Progress),
            (AnomalyStatus::Closed.tone(), Tone::Success),
            (ReportStatus::Generated.tone(), Tone::Success),
            (ReportStatus::InProgress.tone(), Tone::Progress),
            (ReportStatus::Pending.tone(), Tone::Warning),
            (RiskLevel::High.tone(), Tone::Danger),
            (RiskLevel::Medium.tone(), Tone::Warning),
            (RiskLevel::Low.tone(), Tone::Success),
            (MatchStatus::New.tone(), Tone::Info),
            (MatchStatus::Review.tone(), Tone::Warning),
            (MatchStatus::Closed.tone(), Tone::Neutral),
            (AlertStatus::Flagged.tone(), Tone::Danger),
            (AlertStatus::Reviewed.tone(), Tone::Warning),
            (AlertStatus::Cleared.tone(), Tone::Success),
            (VerificationStatus::Verified.tone(), Tone::Success),
            (VerificationStatus::Pending.tone(), Tone::Info),
            (VerificationStatus::Rejected.tone(), Tone::Warning),
            (VerificationStatus::FraudAlert.tone(), Tone::Danger),
        ];
        for (i, (got, want)) in cases.iter().enumerate() {
            assert_eq!(got, want, "case {i}");
        }
    }

    #[test]
    fn test_score_tone_thresholds() {
        assert_eq!(score_tone(98.0), Tone::Danger);
        assert_eq!(score_tone(90.0), Tone::Danger);
        assert_eq!(score_tone(75.0), Tone::Warning);
        assert_eq!(score_tone(12.0), Tone::Success);
    }

    #[test]
    fn test_badge_uses_label() {
        let span = badge(AnomalyStatus::InProgress);
        assert_eq!(span.content, " In Progress ");
        assert!(span.style.bg.is_some());
    }
}
