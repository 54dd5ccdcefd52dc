use std::fmt::Display;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use jamakkol_config::{LogFormat, LoggingSettings, Settings};
use jamakkol_match::{
    MatchDetails, Narrator, OfflineNarrator, Prediction, ScoreLedger, ScriptedNarrator, predict,
};
use jamakkol_time::{ClockTime, UtcOffset, parse_date};
use jamakkol_vedic_base::{
    GeoLocation, Graha, HoraSchedule, Language, Rashi, Site, current_hora_lord, daily_horas,
    dignity_of, distance_quality, find_site, generate_match_theme, house_distance, rashi_lord,
    relation_of, resolve_signs_at, search_sites, sun_times,
};
use serde::Serialize;
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jamakkol", about = "Jamakkol match prediction CLI")]
struct Cli {
    /// Extra settings file, applied after config/default.toml and config/local.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Label language: english | tamil (overrides settings)
    #[arg(long, global = true)]
    lang: Option<String>,
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Default)]
struct LocationArgs {
    /// Catalogue site name (see `sites`)
    #[arg(long)]
    site: Option<String>,
    /// Latitude in degrees, north positive (use with --lng)
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive (use with --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lng: Option<f64>,
    /// Local UTC offset in hours, e.g. 5.5 or -3
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sunrise and sunset for a date and location
    Sun {
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Lagna, udaya and arudha signs for a moment
    Signs {
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
        /// Local time (HH:MM)
        #[arg(long)]
        time: String,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// The 24 horas of a day
    Horas {
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
        /// Mark the hora containing this local time (HH:MM)
        #[arg(long)]
        time: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Lord of the hora containing a moment
    Hora {
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
        /// Local time (HH:MM)
        #[arg(long)]
        time: String,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// How one graha regards another
    Relation {
        /// Graha name (Sun, Moon, ..., Ketu)
        graha: String,
        /// Other graha name
        other: String,
    },
    /// Dignity of a graha placed in a rashi
    Dignity {
        /// Graha name (Sun, Moon, ..., Ketu)
        graha: String,
        /// Rashi number (1-12, 1 = Mesha)
        rashi: u8,
    },
    /// House distance between two rashis
    Distance {
        /// From rashi number (1-12)
        from: u8,
        /// To rashi number (1-12)
        to: u8,
    },
    /// Colour theme for a match moment
    Theme {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (HH:MM)
        #[arg(long)]
        time: String,
    },
    /// Search the site catalogue
    Sites {
        /// Case-insensitive name fragment; lists all sites when omitted
        query: Option<String>,
    },
    /// Full match prediction
    Predict {
        /// Home team name (default from settings)
        #[arg(long)]
        home: Option<String>,
        /// Away team name (default from settings)
        #[arg(long)]
        away: Option<String>,
        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
        /// Kick-off local time (HH:MM), default from settings
        #[arg(long)]
        time: Option<String>,
        /// Use this JSON body as the narrative generator's reply
        #[arg(long)]
        narrative_json: Option<String>,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Print the effective settings as TOML
    Config,
}

// ---------------------------------------------------------------------------
// Argument helpers
// ---------------------------------------------------------------------------

fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_date_or_today(s: Option<&str>) -> Result<NaiveDate, String> {
    match s {
        Some(s) => parse_date(s).map_err(|e| e.to_string()),
        None => Ok(Local::now().date_naive()),
    }
}

fn require_date(s: Option<&str>) -> NaiveDate {
    or_exit(parse_date_or_today(s))
}

fn require_time(s: &str) -> ClockTime {
    or_exit(ClockTime::parse(s))
}

fn require_graha(s: &str) -> Graha {
    or_exit(Graha::from_key(s))
}

fn require_rashi(n: u8) -> Rashi {
    or_exit(Rashi::from_number(n))
}

fn parse_language(flag: Option<&str>, settings: &Settings) -> Result<Language, String> {
    match flag {
        Some(s) => s.parse().map_err(|e: jamakkol_vedic_base::VedicError| e.to_string()),
        None => Ok(settings.language()),
    }
}

/// Venue name and coordinates: explicit --lat/--lng, then --site, then the settings site.
fn resolve_location(
    args: &LocationArgs,
    settings: &Settings,
) -> Result<Option<(String, GeoLocation)>, String> {
    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        let loc = GeoLocation::checked(lat, lng).map_err(|e| e.to_string())?;
        return Ok(Some((format!("{lat:.4}, {lng:.4}"), loc)));
    }
    let site: Option<&'static Site> = match &args.site {
        Some(name) => Some(find_site(name).map_err(|e| e.to_string())?),
        None => settings.site().map_err(|e| e.to_string())?,
    };
    Ok(site.map(|s| (format!("{}, {}", s.name, s.country), s.location)))
}

fn resolve_offset(args: &LocationArgs, settings: &Settings) -> Result<UtcOffset, String> {
    match args.offset {
        Some(hours) => UtcOffset::from_hours(hours).map_err(|e| e.to_string()),
        None => settings.utc_offset().map_err(|e| e.to_string()),
    }
}

fn require_place(args: &LocationArgs, settings: &Settings) -> (Option<(String, GeoLocation)>, UtcOffset) {
    (
        or_exit(resolve_location(args, settings)),
        or_exit(resolve_offset(args, settings)),
    )
}

fn require_location(args: &LocationArgs, settings: &Settings) -> (String, GeoLocation, UtcOffset) {
    let (place, offset) = require_place(args, settings);
    let Some((name, loc)) = place else {
        eprintln!("A location is required: pass --site NAME or --lat/--lng, or set location.site");
        std::process::exit(1);
    };
    (name, loc, offset)
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

fn init_tracing(logging: &LoggingSettings, verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    match logging.format {
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_json<T: Serialize>(value: &T) {
    println!("{}", or_exit(serde_json::to_string_pretty(value)));
}

fn rashi_label(rashi: Rashi, lang: Language) -> String {
    format!("{} ({})", rashi.display_name(lang), rashi.number())
}

fn print_horas(schedule: &HoraSchedule, active: Option<usize>, lang: Language) {
    println!(
        "{} ({}), sunrise {} sunset {}",
        schedule.date,
        schedule.vaar.english_name(),
        schedule.sun.sunrise_label(),
        schedule.sun.sunset_label()
    );
    for seg in &schedule.segments {
        let marker = if active == Some(seg.index as usize) { "  <" } else { "" };
        println!(
            "{:>2}  {} - {}  {:<5}  {:<10}  {}{}",
            seg.index + 1,
            seg.start_label(),
            seg.end_label(),
            if seg.is_day { "day" } else { "night" },
            seg.lord().display_name(lang),
            seg.quality().label(lang),
            marker
        );
    }
}

fn print_ledger(side: &str, ledger: &ScoreLedger) {
    println!(
        "  {side:<5} base {:>3}  day {:>+3}  distance {:>+3}  hora {:>+3}  flow {:>+3}  = {:>3} -> {}",
        ledger.base,
        ledger.day_lord,
        ledger.distance,
        ledger.hora,
        ledger.flow,
        ledger.raw_total(),
        ledger.total()
    );
}

fn print_prediction(p: &Prediction, lang: Language) {
    let d = &p.details;
    println!("{} vs {}", d.home_team, d.away_team);
    println!(
        "{} {} @ {} (UTC{})",
        d.date,
        d.kickoff,
        d.venue.as_deref().unwrap_or("no venue"),
        d.utc_offset
    );
    if let Some(sun) = &p.sun {
        println!("Sunrise {}  Sunset {}", sun.sunrise_label(), sun.sunset_label());
    }
    println!(
        "Lagna {}  Udaya {}  Arudha {}",
        rashi_label(p.signs.lagna, lang),
        rashi_label(p.signs.udaya, lang),
        rashi_label(p.signs.arudha, lang)
    );
    println!(
        "Home lord {}  Away lord {}  Hora lord {}",
        p.home.lord.display_name(lang),
        p.away.lord.display_name(lang),
        p.hora_lord.display_name(lang)
    );
    println!();
    print_ledger("home", &p.outcome.home_ledger);
    print_ledger("away", &p.outcome.away_ledger);
    println!(
        "\nWinner: {}  ({} {}% - {}% {})",
        p.outcome.winner,
        d.home_team,
        p.outcome.home_probability,
        p.outcome.away_probability,
        d.away_team
    );
    println!("\nTimeline:");
    for e in &p.outcome.events {
        println!(
            "  {:>3}'  {}  [{}] {:<10} {:+3}  {}",
            e.minute,
            e.window,
            e.ruler_code,
            e.ruler.display_name(lang),
            e.net,
            e.description
        );
    }
    println!("\n{}", p.explanation.reasoning);
    println!("Lucky time: {}", p.explanation.lucky_time);
}

fn main() {
    let cli = Cli::parse();
    let settings = or_exit(Settings::load_with(cli.config.as_deref()));
    init_tracing(&settings.logging, cli.verbose);
    let lang = or_exit(parse_language(cli.lang.as_deref(), &settings));
    debug!(?lang, "settings loaded");

    match cli.command {
        Commands::Sun { date, location } => {
            let date = require_date(date.as_deref());
            let (name, loc, offset) = require_location(&location, &settings);
            let sun = sun_times(date, &loc, offset);
            if cli.json {
                print_json(&sun);
            } else {
                println!("{name}, {date} (UTC{offset})");
                println!("Sunrise: {}", sun.sunrise_label());
                println!("Sunset:  {}", sun.sunset_label());
                println!("Day length: {:.2} h", sun.day_length_hours());
                if sun.polar_fallback {
                    println!("(sun does not cross the horizon; fixed 06:00/18:00 used)");
                }
            }
        }

        Commands::Signs {
            date,
            time,
            location,
        } => {
            let date = require_date(date.as_deref());
            let time = require_time(&time);
            let (place, offset) = require_place(&location, &settings);
            let signs = resolve_signs_at(date, time, place.as_ref().map(|(_, l)| l), offset);
            if cli.json {
                print_json(&signs);
            } else {
                for (role, rashi) in [
                    ("Lagna", signs.lagna),
                    ("Udaya", signs.udaya),
                    ("Arudha", signs.arudha),
                ] {
                    println!(
                        "{role:<7} {:<20} lord {}",
                        rashi_label(rashi, lang),
                        rashi_lord(rashi).display_name(lang)
                    );
                }
            }
        }

        Commands::Horas {
            date,
            time,
            location,
        } => {
            let date = require_date(date.as_deref());
            let (_, loc, offset) = require_location(&location, &settings);
            let schedule = daily_horas(date, &loc, offset);
            let active = time
                .as_deref()
                .map(require_time)
                .and_then(|t| schedule.active_index(t));
            if cli.json {
                print_json(&json!({ "schedule": schedule, "active_index": active }));
            } else {
                print_horas(&schedule, active, lang);
            }
        }

        Commands::Hora {
            date,
            time,
            location,
        } => {
            let date = require_date(date.as_deref());
            let time = require_time(&time);
            let (place, offset) = require_place(&location, &settings);
            let lord = current_hora_lord(date, time, place.as_ref().map(|(_, l)| l), offset);
            if cli.json {
                print_json(&json!({ "date": date, "time": time.to_string(), "lord": lord }));
            } else {
                println!("Hora lord at {date} {time}: {}", lord.display_name(lang));
            }
        }

        Commands::Relation { graha, other } => {
            let a = require_graha(&graha);
            let b = require_graha(&other);
            let relation = relation_of(a, b);
            if cli.json {
                print_json(&json!({ "graha": a, "other": b, "relation": relation }));
            } else {
                println!(
                    "{} regards {}: {}",
                    a.display_name(lang),
                    b.display_name(lang),
                    relation.label(lang)
                );
            }
        }

        Commands::Dignity { graha, rashi } => {
            let g = require_graha(&graha);
            let r = require_rashi(rashi);
            let dignity = dignity_of(g, r);
            if cli.json {
                print_json(&json!({ "graha": g, "rashi": r, "dignity": dignity }));
            } else {
                println!(
                    "{} in {}: {}",
                    g.display_name(lang),
                    rashi_label(r, lang),
                    dignity.label(lang)
                );
            }
        }

        Commands::Distance { from, to } => {
            let (a, b) = (require_rashi(from), require_rashi(to));
            let distance = house_distance(a, b);
            let quality = distance_quality(distance);
            if cli.json {
                print_json(&json!({ "from": a, "to": b, "distance": distance, "quality": quality }));
            } else {
                println!(
                    "{} -> {}: house {distance} ({})",
                    rashi_label(a, lang),
                    rashi_label(b, lang),
                    quality.label()
                );
            }
        }

        Commands::Theme { date, time } => {
            let theme = generate_match_theme(&date, &time);
            if cli.json {
                print_json(&theme);
            } else {
                println!("Home:   {}  {}", theme.home_color, theme.home_gradient);
                println!("Away:   {}  {}", theme.away_color, theme.away_gradient);
                println!("Accent: {}", theme.accent_color);
            }
        }

        Commands::Sites { query } => {
            let sites = search_sites(query.as_deref().unwrap_or(""));
            if cli.json {
                print_json(&sites);
            } else if sites.is_empty() {
                println!("No matching sites");
            } else {
                for s in sites {
                    println!(
                        "{:<12} {:<8} {:>9.4} {:>9.4}",
                        s.name, s.country, s.location.latitude_deg, s.location.longitude_deg
                    );
                }
            }
        }

        Commands::Predict {
            home,
            away,
            date,
            time,
            narrative_json,
            location,
        } => {
            let date = require_date(date.as_deref());
            let kickoff = match time.as_deref() {
                Some(t) => require_time(t),
                None => or_exit(settings.kickoff()),
            };
            let home = home.unwrap_or_else(|| settings.fixture.home_team.clone());
            let away = away.unwrap_or_else(|| settings.fixture.away_team.clone());
            let (place, offset) = require_place(&location, &settings);

            let mut details = or_exit(MatchDetails::new(&home, &away, date, kickoff)).with_offset(offset);
            if let Some((venue, loc)) = place {
                details = details.with_location(loc);
                details.venue = Some(venue);
            }

            let narrator: Box<dyn Narrator> = match narrative_json {
                Some(body) => Box::new(ScriptedNarrator::new(body)),
                None => Box::new(OfflineNarrator),
            };
            let prediction = predict(&details, narrator.as_ref(), &settings.narrative);
            if cli.json {
                print_json(&prediction);
            } else {
                print_prediction(&prediction, lang);
            }
        }

        Commands::Config => {
            print!("{}", or_exit(settings.to_toml()));
        }
    }
}
