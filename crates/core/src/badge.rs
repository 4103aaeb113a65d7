//! Status and urgency badge classification
//!
//! Pure mapping from contract state to a presentation hint; how a style gets
//! rendered (CSS class, ANSI color) is the consumer's business.

/// Visual style bucket for a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Green,
    Gray,
    Yellow,
    Blue,
    Red,
}

/// A classified label ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub style: BadgeStyle,
    pub label: String,
}

impl Badge {
    fn new(style: BadgeStyle, label: impl Into<String>) -> Self {
        Self {
            style,
            label: label.into(),
        }
    }
}

/// Badge for a contract status
///
/// Unknown statuses keep the raw string as their label instead of being
/// swallowed.
pub fn status_badge(status: &str) -> Badge {
    match status {
        "ativo" => Badge::new(BadgeStyle::Green, "Ativo"),
        "inativo" => Badge::new(BadgeStyle::Gray, "Inativo"),
        "pendente" => Badge::new(BadgeStyle::Yellow, "Pendente"),
        "concluido" => Badge::new(BadgeStyle::Blue, "Concluído"),
        "vencido" => Badge::new(BadgeStyle::Red, "Vencido"),
        outro => Badge::new(BadgeStyle::Gray, outro),
    }
}

/// Urgency badge for a days-remaining figure
///
/// Half-open buckets: 7 already counts as attention, 30 as normal.
pub fn prioridade_badge(dias: i64) -> Badge {
    if dias < 7 {
        Badge::new(BadgeStyle::Red, "Urgente")
    } else if dias < 30 {
        Badge::new(BadgeStyle::Yellow, "Atenção")
    } else {
        Badge::new(BadgeStyle::Green, "Normal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_conhecidos() {
        assert_eq!(status_badge("ativo").label, "Ativo");
        assert_eq!(status_badge("ativo").style, BadgeStyle::Green);
        assert_eq!(status_badge("vencido").style, BadgeStyle::Red);
        assert_eq!(status_badge("concluido").label, "Concluído");
    }

    #[test]
    fn status_desconhecido_preserva_rotulo() {
        let badge = status_badge("em_revisao");
        assert_eq!(badge.style, BadgeStyle::Gray);
        assert_eq!(badge.label, "em_revisao");
    }

    #[test]
    fn prioridade_limites() {
        assert_eq!(prioridade_badge(6).label, "Urgente");
        assert_eq!(prioridade_badge(7).label, "Atenção");
        assert_eq!(prioridade_badge(29).label, "Atenção");
        assert_eq!(prioridade_badge(30).label, "Normal");
        assert_eq!(prioridade_badge(-2).label, "Urgente");
    }
}
