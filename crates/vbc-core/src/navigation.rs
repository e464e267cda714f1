//! Tabs and colour theme of the checker UI

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Verificacao,
    Dashboard,
    Historico,
    Regras,
    Arquitetura,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Verificacao,
        Tab::Dashboard,
        Tab::Historico,
        Tab::Regras,
        Tab::Arquitetura,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Verificacao => "Verificação em tempo real",
            Tab::Dashboard => "Dashboard",
            Tab::Historico => "Histórico de verificações",
            Tab::Regras => "Regras & alertas",
            Tab::Arquitetura => "Arquitetura / IA",
        }
    }

    /// Client-side route of the tab
    pub fn path(self) -> &'static str {
        match self {
            Tab::Verificacao => "/",
            Tab::Dashboard => "/dashboard",
            Tab::Historico => "/historico",
            Tab::Regras => "/regras",
            Tab::Arquitetura => "/arquitetura",
        }
    }

    /// Tab owning a route; unknown paths fall back to the checker
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        Tab::ALL
            .into_iter()
            .find(|tab| tab.path().trim_end_matches('/') == path)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert!(Theme::Light.toggle().is_dark());
    }

    #[test]
    fn test_tab_routes() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_path(tab.path()), tab);
        }
        assert_eq!(Tab::from_path("/historico/"), Tab::Historico);
        assert_eq!(Tab::from_path("/nada"), Tab::Verificacao);
    }
}
