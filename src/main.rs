// Draft tracker entry point: a line-oriented front end over the core.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not the terminal, which is the UI)
// 2. Load config (copying defaults/ into config/ on first run)
// 3. Load the player catalog (data files or embedded fallback)
// 4. Start the draft session
// 5. Run the stdin command loop

use std::io::{BufRead, Write};

use anyhow::Context;
use draft_tracker::app::App;
use draft_tracker::catalog::{loader, MediaRef};
use draft_tracker::catalog::schema::STAT_FIELDS;
use draft_tracker::config;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;
    info!("draft tracker starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "config loaded: {} teams, {} rounds",
        config.draft.num_teams, config.draft.rounds
    );

    // 3. Load the player catalog
    let catalog =
        loader::load(&config.data_paths).context("failed to load the player catalog")?;
    println!(
        "Loaded {} players. {} teams, {} rounds.",
        catalog.len(),
        config.draft.num_teams,
        config.draft.rounds
    );

    // 4. Start the draft session
    let mut app = App::new(config, catalog);
    app.start_draft().context("failed to start the draft")?;
    println!("Draft is live. Type 'help' for commands.");
    print_next(&app);

    // 5. Command loop
    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if !dispatch(&mut app, line.trim()) {
            break;
        }
    }

    info!("draft tracker shut down cleanly");
    Ok(())
}

/// Handle one command line. Returns `false` when the user quits.
fn dispatch(app: &mut App, line: &str) -> bool {
    let (cmd, rest) = match line.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match cmd {
        "" => {}
        "help" => print_help(),
        "start" => match app.start_draft() {
            Ok(()) => {
                println!("Draft restarted.");
                print_next(app);
            }
            Err(e) => println!("Error: {e}"),
        },
        "pick" => do_pick(app, rest),
        "next" => print_next(app),
        "board" => print_board(app),
        "available" => print_available(app, rest),
        "stats" => print_stats(app, rest),
        "set" => do_set(app, rest),
        "roster" => print_roster(app, rest),
        "quit" | "exit" => return false,
        other => println!("Unknown command '{other}'. Type 'help' for commands."),
    }
    true
}

fn do_pick(app: &mut App, name: &str) {
    match app.draft_player(name) {
        Ok(outcome) => {
            println!(
                "Pick {}: {} -> {} ({})",
                outcome.pick_number,
                name.trim(),
                outcome.team_name,
                outcome.slot
            );
            match outcome.media {
                Some(MediaRef::File(path)) => println!("Highlight: {}", path.display()),
                Some(MediaRef::Url(url)) => println!("Highlight: {url}"),
                None => println!("No highlight available."),
            }
            if outcome.draft_complete {
                println!("Draft complete!");
            } else {
                print_next(app);
            }
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn do_set(app: &mut App, rest: &str) {
    // set <player> | <field> | <value>
    let parts: Vec<&str> = rest.splitn(3, '|').map(str::trim).collect();
    if parts.len() != 3 {
        println!("Usage: set <player> | <field> | <value>");
        return;
    }
    match app.edit_stat(parts[0], parts[1], parts[2]) {
        Ok(()) => println!("Updated {} / {}.", parts[0], parts[1]),
        Err(e) => println!("Error: {e}"),
    }
}

fn print_next(app: &App) {
    match app.next_up() {
        Ok((slot, team)) => println!("Next pick: round {}, {}", slot.round + 1, team),
        Err(e) => println!("Next pick: {e}"),
    }
}

fn print_board(app: &App) {
    let board = app.session.board();
    let teams = app.session.team_names();
    if teams.is_empty() {
        println!("No draft in progress.");
        return;
    }

    print!("{:>5}", "RND");
    for team in teams {
        print!(" | {:<18}", truncate(team, 18));
    }
    println!();

    for (round_idx, row) in board.rows().iter().enumerate() {
        print!("{:>5}", round_idx + 1);
        for cell in row {
            let shown = if cell.is_empty() { "-" } else { cell };
            print!(" | {:<18}", truncate(shown, 18));
        }
        println!();
    }
}

fn print_available(app: &App, rest: &str) {
    let limit = rest.parse::<usize>().unwrap_or(20);
    println!("{:<24} {:>8} {:>6} {:>10}", "PLAYER", "ADP", "POS", "PROJ PTS");
    for player in app.available().into_iter().take(limit) {
        let adp = player.stats.get("ADP").map(ToString::to_string).unwrap_or_default();
        let pos = player
            .stats
            .get("Position")
            .map(ToString::to_string)
            .unwrap_or_default();
        let proj = player
            .stats
            .get("Projected Points")
            .map(ToString::to_string)
            .unwrap_or_default();
        println!("{:<24} {:>8} {:>6} {:>10}", truncate(&player.name, 24), adp, pos, proj);
    }
}

fn print_stats(app: &App, name: &str) {
    match app.catalog.get_stats(name) {
        Ok(record) => {
            for (field, value) in record.iter() {
                println!("{field:<26} {value}");
            }
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn print_roster(app: &App, rest: &str) {
    let teams = app.session.team_names();
    let Ok(team_number) = rest.parse::<usize>() else {
        println!("Usage: roster <team number 1..{}>", teams.len());
        return;
    };
    if team_number == 0 || team_number > teams.len() {
        println!("No such team. Teams are 1..{}.", teams.len());
        return;
    }
    let idx = team_number - 1;
    println!("{}:", teams[idx]);
    let roster = app.session.team_roster(idx);
    if roster.is_empty() {
        println!("  (no picks yet)");
    }
    for (i, player) in roster.iter().enumerate() {
        println!("  R{:<3} {}", i + 1, player);
    }
}

fn print_help() {
    println!("Commands:");
    println!("  pick <name>                   draft a player for the team on the clock");
    println!("  next                          show who picks next");
    println!("  board                         show the draft board");
    println!("  available [n]                 show the top n undrafted players (default 20)");
    println!("  stats <name>                  show a player's full stat record");
    println!("  set <name> | <field> | <val>  edit a stat cell");
    println!("  roster <team number>          show one team's picks");
    println!("  start                         restart the draft from scratch");
    println!("  quit                          exit");
    println!("Stat fields: {}", STAT_FIELDS.join(", "));
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Initialize tracing to log to a file (the terminal is the UI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("draft-tracker.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("draft_tracker=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
