use anyhow::Context;
use gradechat::kernel::reactor::ChatReactor;
use gradechat::ledger::{CourseRecord, InMemoryLedger};
use gradechat::nlp::GradeLexicon;
use gradechat::outputs::ResponseComposer;
use gradechat::AssistantConfig;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

fn load_config() -> anyhow::Result<AssistantConfig> {
    let config = match std::env::args().nth(1) {
        Some(path) => AssistantConfig::load(Path::new(&path))
            .with_context(|| format!("failed to load config from {}", path))?,
        None => AssistantConfig::default(),
    };
    Ok(config.with_env()?)
}

fn print_courses(courses: &[CourseRecord]) {
    if courses.is_empty() {
        println!("No courses added yet.");
        return;
    }
    for (i, course) in courses.iter().enumerate() {
        println!(
            "{:>2}. {} | Grade: {} ({:.1}) | Credits: {}",
            i + 1,
            course.name,
            GradeLexicon::letter_for(course.grade),
            course.grade,
            course.credits
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    // Initialize logging/tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    tracing::info!("GPA chat booting...");

    let (reactor, mut replies) = ChatReactor::new(&config, InMemoryLedger::new());

    let printer = tokio::spawn(async move {
        while let Some(reply) = replies.recv().await {
            println!("bot> {}", ResponseComposer::to_plain_text(&reply.body));
        }
    });

    println!("Ask me about your GPA. Type 'help' for examples, '/quit' to exit.");

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["/quit"] | ["/exit"] => break,
            ["/courses"] => reactor.with_ledger(|ledger| print_courses(ledger.courses())),
            ["/remove", n] => {
                let removed = reactor.with_ledger(|ledger| {
                    let id = n
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .and_then(|i| ledger.courses().get(i))
                        .map(|c| c.id);
                    id.and_then(|id| ledger.remove_course(id).ok())
                });
                match removed {
                    Some(course) => println!("Removed {}.", course.name),
                    None => println!("No course #{}. Use /courses to list them.", n),
                }
            }
            ["/reset"] => {
                let removed = reactor.with_ledger(|ledger| ledger.reset_semester());
                println!("Cleared {} course(s). The previous GPA is kept.", removed);
            }
            ["/reset", "previous"] => {
                reactor.with_ledger(|ledger| ledger.clear_previous());
                println!("Cleared the previous GPA.");
            }
            ["/stats"] => {
                let snapshot = reactor.telemetry();
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            _ => {
                reactor.submit(line);
            }
        }
    }

    tracing::info!(pending = reactor.pending(), "Shutting down");
    reactor.drain().await;
    drop(reactor);
    printer.await.context("reply printer panicked")?;
    Ok(())
}
