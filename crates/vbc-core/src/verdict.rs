//! Verdict classification and its presentation

use serde::{Deserialize, Serialize};

/// Display category for a backend verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerdictClass {
    Safe,
    Suspect,
    Fraud,
    Indeterminate,
}

/// Colour family used to render a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Positive,
    Warning,
    Danger,
    Neutral,
}

/// Copy shown for a verdict on the result card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictPresentation {
    pub label: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
    pub tone: Tone,
}

/// Map a free-form verdict token onto a display category.
///
/// Unknown, empty and missing tokens are all `Indeterminate`.
pub fn classify(verdict: Option<&str>) -> VerdictClass {
    let token = verdict.unwrap_or_default().to_uppercase();

    match token.as_str() {
        "SAFE" | "LEGIT" | "SEGURO" => VerdictClass::Safe,
        "SUSPECT" | "SUSPICIOUS" | "SUSPEITO" => VerdictClass::Suspect,
        "FRAUD" | "MALICIOUS" | "GOLPE" => VerdictClass::Fraud,
        _ => VerdictClass::Indeterminate,
    }
}

impl VerdictClass {
    pub fn presentation(&self) -> VerdictPresentation {
        match self {
            VerdictClass::Safe => VerdictPresentation {
                label: "URL segura",
                description: "Nenhum indício relevante de fraude foi encontrado. Ainda assim, sempre confirme o remetente e o canal oficial.",
                badge: "Seguro",
                tone: Tone::Positive,
            },
            VerdictClass::Suspect => VerdictPresentation {
                label: "URL suspeita",
                description: "Foram detectados sinais de risco. Recomendamos que você não acesse o link e não informe dados pessoais.",
                badge: "Suspeito",
                tone: Tone::Warning,
            },
            VerdictClass::Fraud => VerdictPresentation {
                label: "Possível golpe",
                description: "Alta probabilidade de fraude. Não clique, não compartilhe e oriente o cliente a buscar o canal oficial do banco.",
                badge: "Alto risco",
                tone: Tone::Danger,
            },
            VerdictClass::Indeterminate => VerdictPresentation {
                label: "Classificação indeterminada",
                description: "A análise não chegou a um veredito claro. Em casos assim, a recomendação é tratar o link como suspeito.",
                badge: "Indefinido",
                tone: Tone::Neutral,
            },
        }
    }
}
