//! Interactive session: one URL per line, history kept until exit

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use vbc_core::report;
use vbc_core::{CheckApi, RiskStats, Session, SubmissionState};

const HELP: &str = "\
Cole uma URL e pressione Enter para analisar.
Comandos:
  :historico    histórico de verificações da sessão
  :dashboard    visão geral do risco
  :regras       regras antifraude & alertas
  :arquitetura  arquitetura da solução
  :ajuda        esta mensagem
  :sair         encerrar";

/// What one input line asks for
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Check(String),
    History,
    Dashboard,
    Rules,
    Architecture,
    Help,
    Quit,
    Unknown(String),
}

fn parse_line(line: &str) -> Line {
    let trimmed = line.trim();

    let Some(command) = trimmed.strip_prefix(':') else {
        return Line::Check(line.to_string());
    };

    match command.to_lowercase().as_str() {
        "historico" | "histórico" | "history" => Line::History,
        "dashboard" => Line::Dashboard,
        "regras" | "rules" => Line::Rules,
        "arquitetura" | "architecture" => Line::Architecture,
        "ajuda" | "help" | "?" => Line::Help,
        "sair" | "quit" | "q" => Line::Quit,
        other => Line::Unknown(other.to_string()),
    }
}

pub async fn run<A>(api: &A) -> std::io::Result<()>
where
    A: CheckApi + ?Sized,
{
    let mut session = Session::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);

    loop {
        print!("\nURL> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_line(&line) {
            Line::Check(url) => {
                session.set_input(url);
                // The session keeps whatever the user needs to see
                let _ = session.submit(api).await;
                print!("{}", outcome_text(&session));
            }
            Line::History => print!("{}", report::history_table(session.history())),
            Line::Dashboard => {
                let stats = RiskStats::from_results(session.history());
                print!("{}", report::dashboard(&stats));
            }
            Line::Rules => print!("{}", report::rules_panel()),
            Line::Architecture => print!("{}", report::architecture_panel()),
            Line::Help => println!("{}", HELP),
            Line::Quit => break,
            Line::Unknown(command) => println!("Comando desconhecido: :{} (use :ajuda)", command),
        }
    }

    Ok(())
}

fn outcome_text(session: &Session) -> String {
    match (session.state(), session.result(), session.error()) {
        (SubmissionState::Success, Some(result), _) => report::result_card(result),
        (_, _, Some(message)) => format!("{}\n", message),
        _ => String::new(),
    }
}
