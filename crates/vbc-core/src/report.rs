//! Plain-text and JSON rendering of check results

use std::fmt::Write;

use crate::content::{
    ARCHITECTURE_FLOW, ARCHITECTURE_INTRO, ARCHITECTURE_ITEMS, ARCHITECTURE_OUTRO,
    ARCHITECTURE_TITLE, HISTORY_FOOTNOTE, RULES_FOOTNOTE, RULES_TITLE, RULE_CARDS,
};
use crate::datetime::format_date;
use crate::score::{score_cell, score_label};
use crate::{CheckResult, History, RiskStats};

const URL_COLUMN_WIDTH: usize = 40;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Render one result in the requested format
pub fn generate(result: &CheckResult, format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(result_card(result)),
        ReportFormat::Json => serde_json::to_string_pretty(result),
    }
}

/// The result card: verdict, score, metadata and reasons
pub fn result_card(result: &CheckResult) -> String {
    let presentation = result.verdict_class().presentation();
    let mut out = String::new();

    let _ = write!(out, "[{}] {}", presentation.badge, presentation.label);
    if let Some(score) = score_label(result.score) {
        let _ = write!(out, "    Score de risco: {}", score);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", presentation.description);

    let fields = [
        ("URL original", result.raw_input.clone()),
        ("URL normalizada", result.normalized_url.clone()),
        ("Domínio base", result.domain.clone()),
        (
            "Data/hora da análise",
            result
                .submitted_at
                .as_deref()
                .map(|ts| format_date(Some(ts))),
        ),
        ("Origem da análise", result.source.clone()),
    ];

    let present: Vec<_> = fields
        .into_iter()
        .filter_map(|(name, value)| value.filter(|v| !v.is_empty()).map(|v| (name, v)))
        .collect();

    if !present.is_empty() {
        let _ = writeln!(out);
        for (name, value) in present {
            let _ = writeln!(out, "{}: {}", name, value);
        }
    }

    let reasons = result.reasons();
    if !reasons.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Motivos identificados:");
        for reason in reasons {
            let _ = writeln!(out, "  - {}", reason);
        }
    }

    out
}

/// Session history as a fixed-width table
pub fn history_table(history: &History) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Histórico de verificações (sessão atual)");
    let _ = writeln!(out, "{}", "=".repeat(50));

    if history.is_empty() {
        let _ = writeln!(
            out,
            "Ainda não há verificações nesta sessão. Use a aba de Verificação em tempo real para iniciar."
        );
        return out;
    }

    let _ = writeln!(
        out,
        "{:<20}  {:<width$}  {:<24}  {:<10}  {}",
        "Data/Hora",
        "URL",
        "Domínio",
        "Veredito",
        "Score",
        width = URL_COLUMN_WIDTH
    );
    for item in history {
        let _ = writeln!(
            out,
            "{:<20}  {:<width$}  {:<24}  {:<10}  {}",
            format_date(item.submitted_at.as_deref()),
            truncate(item.raw_input.as_deref().unwrap_or_default(), URL_COLUMN_WIDTH),
            item.domain.as_deref().filter(|d| !d.is_empty()).unwrap_or("-"),
            item.verdict_token(),
            score_cell(item.score),
            width = URL_COLUMN_WIDTH
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", HISTORY_FOOTNOTE);
    out
}

/// Dashboard counts and a horizontal bar per category
pub fn dashboard(stats: &RiskStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Visão geral do risco");
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out, "Total de URLs: {} (links analisados nesta sessão)", stats.total);
    let _ = writeln!(out, "Seguras: {} ({}%)", stats.safe, stats.safe_pct());
    let _ = writeln!(
        out,
        "Suspeitas / Golpes: {} ({}%)",
        stats.risky(),
        stats.risky_pct()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Distribuição por classificação");

    for (label, pct) in [
        ("Seguro", stats.safe_pct()),
        ("Suspeito", stats.suspect_pct()),
        ("Golpe", stats.fraud_pct()),
    ] {
        let bar = "#".repeat((RiskStats::bar_height(pct) / 4) as usize);
        let _ = writeln!(out, "{:<9} {:<25} {}%", label, bar, pct);
    }

    out
}

pub fn rules_panel() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULES_TITLE);
    let _ = writeln!(out, "{}", "=".repeat(50));
    for card in RULE_CARDS {
        let _ = writeln!(out, "{}", card.title);
        let _ = writeln!(out, "   {}", card.description);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", RULES_FOOTNOTE);
    out
}

pub fn architecture_panel() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", ARCHITECTURE_TITLE);
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out, "{}", ARCHITECTURE_INTRO);
    for item in ARCHITECTURE_ITEMS {
        let _ = writeln!(out, "  * {} {}", item.layer, item.role);
    }
    let _ = writeln!(out, "{}", ARCHITECTURE_OUTRO);
    let _ = writeln!(out);
    let _ = writeln!(out, "Fluxo resumido");
    for (i, step) in ARCHITECTURE_FLOW.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out, "      |");
        }
        let line: Vec<_> = step
            .iter()
            .map(|(name, detail)| format!("[{}: {}]", name, detail))
            .collect();
        let _ = writeln!(out, "  {}", line.join("  "));
    }
    out
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CheckResult {
        CheckResult {
            verdict: Some("FRAUD".into()),
            score: Some(92.0),
            rule_hits: vec!["keyword_match".into()],
            evidence_summary: vec!["Página imita o Banco Central".into()],
            domain: Some("valores-receber.net".into()),
            raw_input: Some("https://valores-receber.net/cpf".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_result_card() {
        let card = result_card(&sample());
        assert!(card.starts_with("[Alto risco] Possível golpe"));
        assert!(card.contains("Score de risco: 92 / 100"));
        assert!(card.contains("Domínio base: valores-receber.net"));
        assert!(card.contains("  - Regra acionada: keyword_match\n"));
        assert!(card.contains("  - Evidência de IA: Página imita o Banco Central\n"));
        assert!(!card.contains("URL normalizada"));
    }

    #[test]
    fn test_card_shows_analysis_source() {
        let result = CheckResult {
            verdict: Some("SAFE".into()),
            source: Some("RULES".into()),
            ..Default::default()
        };
        let card = result_card(&result);
        assert!(card.starts_with("[Seguro] URL segura"));
        assert!(card.contains("Origem da análise: RULES\n"));
        assert!(!result_card(&sample()).contains("Origem da análise"));
    }

    #[test]
    fn test_card_without_score_or_reasons() {
        let card = result_card(&CheckResult::default());
        assert!(card.starts_with("[Indefinido] Classificação indeterminada\n"));
        assert!(!card.contains("Score de risco"));
        assert!(!card.contains("Motivos identificados"));
    }

    #[test]
    fn test_history_table() {
        let mut history = History::new();
        assert!(history_table(&history).contains("Ainda não há verificações"));

        history.push(sample());
        history.push(CheckResult {
            raw_input: Some(format!("https://{}.com", "a".repeat(60))),
            ..Default::default()
        });
        let table = history_table(&history);
        assert!(table.contains("FRAUD"));
        assert!(table.contains("92/100"));
        assert!(table.contains("UNKNOWN"));
        assert!(table.contains('…'));
    }

    #[test]
    fn test_dashboard() {
        let history: Vec<CheckResult> = vec![sample(), CheckResult::default()];
        let text = dashboard(&RiskStats::from_results(&history));
        assert!(text.contains("Total de URLs: 2"));
        assert!(text.contains("Seguras: 0 (0%)"));
        assert!(text.contains("Suspeitas / Golpes: 1 (50%)"));
    }

    #[test]
    fn test_json_format() {
        let json = generate(&sample(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["verdict"], "FRAUD");
        assert_eq!(value["ruleHits"][0], "keyword_match");
    }

    #[test]
    fn test_static_panels() {
        assert!(rules_panel().contains("Palavras-chave típicas de golpe"));
        assert!(architecture_panel().contains("/api/v1/checks"));
    }
}
