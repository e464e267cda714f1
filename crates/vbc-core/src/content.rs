//! Static copy for the rules and architecture panels

/// One antifraud rule described on the rules panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const RULES_TITLE: &str = "Regras antifraude & alertas";

pub const RULE_CARDS: [RuleCard; 4] = [
    RuleCard {
        title: "1. Domínio similar ao do banco",
        description: "Ex.: \"bradescco.com\", \"bradesco-valores.com\", etc. Dispara alerta de similaridade e aumenta o score de risco.",
    },
    RuleCard {
        title: "2. Palavras-chave típicas de golpe",
        description: "Termos como \"valores a receber\", \"saldo bloqueado\" e \"regularização urgente\" aumentam o peso da análise.",
    },
    RuleCard {
        title: "3. URLs recém-criadas / pouco vistas",
        description: "Endereços sem histórico na base ou sem recorrência entram como risco intermediário, priorizando o olho humano.",
    },
    RuleCard {
        title: "4. Padrões suspeitos de parâmetros",
        description: "Parâmetros com CPF, token ou dados sensíveis na URL indicam risco alto de vazamento de informações.",
    },
];

pub const RULES_FOOTNOTE: &str = "O motor de regras funciona como a primeira linha de defesa, traduzindo conhecimento de especialistas de risco em validações automatizadas, e a IA entra como segunda camada, ajudando nas situações ambíguas.";

/// A labelled bullet on the architecture panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchitectureItem {
    pub layer: &'static str,
    pub role: &'static str,
}

pub const ARCHITECTURE_TITLE: &str = "Arquitetura da solução & uso de IA";

pub const ARCHITECTURE_INTRO: &str = "A solução foi desenhada para se aproximar de um módulo antifraude real, porém com foco didático para apresentação em banca:";

pub const ARCHITECTURE_ITEMS: [ArchitectureItem; 5] = [
    ArchitectureItem {
        layer: "Frontend (Rust + Leptos):",
        role: "coleta a URL, exibe o veredito, histórico e dashboards explicativos.",
    },
    ArchitectureItem {
        layer: "API Java / Spring Boot:",
        role: "expõe o endpoint /api/v1/checks, normaliza a URL, extrai o domínio e orquestra o processo de decisão.",
    },
    ArchitectureItem {
        layer: "Motor de regras:",
        role: "validações específicas do golpe de \"valores a receber\" (similaridade de domínio, palavras-chave, parâmetros suspeitos, histórico).",
    },
    ArchitectureItem {
        layer: "IA generativa:",
        role: "quando as regras não são suficientes, a IA gera um parecer textual, explica o risco e adiciona evidências à resposta.",
    },
    ArchitectureItem {
        layer: "Banco de dados (URL Record, whitelist, blacklist):",
        role: "registra as URLs analisadas e dá contexto para próximas decisões.",
    },
];

pub const ARCHITECTURE_OUTRO: &str = "A arquitetura é extensível: novas regras, novos modelos de IA e novas fontes de dados podem ser plugadas sem mudar o fluxo principal.";

/// Flow diagram steps, top to bottom. Inner slices are drawn side by side.
pub const ARCHITECTURE_FLOW: [&[(&str, &str)]; 4] = [
    &[("Frontend", "Form de URL + visualização de risco")],
    &[
        ("Motor de regras", "Padrões do golpe \"valores a receber\""),
        ("IA generativa", "Explicações & evidências"),
    ],
    &[("Banco de dados", "URL Record · whitelist · blacklist")],
    &[("Resposta para o usuário", "Veredito + score + motivos")],
];

pub const FORM_HINT: &str = "A interface envia a URL em um payload padronizado para a API, que aplica regras antifraude, consulta whitelist/blacklist e, quando necessário, aciona a IA para complementar o veredito.";

pub const HISTORY_FOOTNOTE: &str = "O histórico demonstra como o módulo registra cada verificação, permitindo auditoria, ajustes de regras e evolução da IA com base nos casos reais analisados.";

pub const DASHBOARD_FOOTNOTE: &str = "Este dashboard é focado na demonstração do comportamento da solução: à medida que novas URLs são testadas, a distribuição vai sendo atualizada.";
