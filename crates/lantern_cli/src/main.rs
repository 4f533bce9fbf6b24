//! Lantern CLI
//!
//! Inspects and edits a user's presentation settings and prints what the
//! resolver makes of them:
//! - `resolve` merges settings, theme, scene, weather tone and accessibility
//! - `set` / `reset` / `scene` / `toggle-mode` edit the stored records
//! - `themes`, `scenes`, `wallpapers` and `inspiration` browse the catalogs
//! - `watch` runs the periodic tone refresh against fixed weather

mod config;
mod report;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use config::{LanternConfig, CONFIG_FILE};
use lantern_ambient::wallpaper::{curated, WallpaperMood};
use lantern_ambient::{
    daily_inspiration, tone_for, AccessibilitySignal, SceneCatalog, SceneMood, WeatherSignal,
};
use lantern_animation::ReducedMotion;
use lantern_settings::{
    FileBackend, ResetScope, SettingsKey, SettingsStore, StoreState, ToneRefresher, TracingSink,
    WeatherSource,
};
use lantern_theme::{ThemeCatalog, ThemeCategory};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Personalized ambient presentation, from the terminal
#[derive(Parser, Debug)]
#[command(name = "lantern")]
#[command(about = "Inspect and edit Lantern presentation settings")]
#[command(version)]
struct Cli {
    /// Config file, or a directory containing lantern.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Settings namespace; overrides [storage] user
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default lantern.toml
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the fully resolved presentation
    Resolve {
        #[command(flatten)]
        weather: WeatherArgs,

        /// Act as if the platform asked for reduced motion
        #[arg(long)]
        reduced_motion: bool,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Print the stored settings records as JSON
    Show,

    /// Apply `field=value` updates to one settings record
    Set {
        #[arg(value_enum)]
        record: Record,

        /// camelCase field names; values are JSON or bare strings
        #[arg(required = true, value_name = "FIELD=VALUE")]
        fields: Vec<String>,
    },

    /// Activate a scene, or turn scenes off when no id is given
    Scene { id: Option<String> },

    /// Flip between light and dark
    ToggleMode,

    /// Restore defaults
    Reset {
        #[arg(value_enum, default_value = "all")]
        scope: Scope,
    },

    /// List built-in themes
    Themes {
        /// Only this category (nature, sports, ...)
        #[arg(long)]
        category: Option<String>,
    },

    /// List built-in and custom scenes
    Scenes {
        /// Only this mood (focus, relax, create, energize)
        #[arg(long)]
        mood: Option<String>,
    },

    /// List curated wallpapers
    Wallpapers {
        #[arg(long)]
        mood: Option<String>,
    },

    /// Print the quote of the day
    Inspiration {
        /// YYYY-MM-DD; defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print the weather tone and suggestions
    Tone {
        #[command(flatten)]
        weather: WeatherArgs,
    },

    /// Refresh the weather tone periodically and print each update
    Watch {
        #[command(flatten)]
        weather: WeatherArgs,

        /// Seconds between refreshes; defaults to [tone] refresh_interval_secs
        #[arg(long)]
        interval: Option<u64>,

        /// Stop after this many updates
        #[arg(long, default_value = "3")]
        updates: usize,
    },
}

/// Current conditions, as a weather provider would report them
#[derive(Args, Debug)]
struct WeatherArgs {
    /// WMO weather code; no weather is assumed without one
    #[arg(long)]
    weather_code: Option<u8>,

    /// Temperature in degrees Celsius
    #[arg(long, allow_hyphen_values = true)]
    temp: Option<f32>,

    /// Local sunset as HH:MM
    #[arg(long, value_parser = parse_hour_minute)]
    sunset: Option<NaiveTime>,

    /// Local time to evaluate at, YYYY-MM-DDTHH:MM:SS; defaults to now
    #[arg(long)]
    at: Option<NaiveDateTime>,
}

impl WeatherArgs {
    fn signal(&self) -> Option<WeatherSignal> {
        let code = self.weather_code?;
        let signal = WeatherSignal::from_wmo_code(code, self.temp);
        Some(match self.sunset {
            Some(sunset) => signal.with_sunset(sunset),
            None => signal,
        })
    }

    fn now(&self) -> NaiveDateTime {
        self.at.unwrap_or_else(|| Local::now().naive_local())
    }
}

fn parse_hour_minute(raw: &str) -> std::result::Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Record {
    Theme,
    Scene,
    Colors,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scope {
    Theme,
    Scene,
    Colors,
    All,
}

impl From<Scope> for ResetScope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Theme => ResetScope::Theme,
            Scope::Scene => ResetScope::Scene,
            Scope::Colors => ResetScope::Colors,
            Scope::All => ResetScope::All,
        }
    }
}

/// The same reading on every poll
struct FixedWeather(Option<WeatherSignal>);

#[async_trait]
impl WeatherSource for FixedWeather {
    async fn current(&self) -> lantern_settings::Result<Option<WeatherSignal>> {
        Ok(self.0.clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = LanternConfig::load(cli.config.as_deref())?;
    init_logging(&config.log_level);

    match cli.command {
        Commands::Init { path, force } => init(&path, force),
        Commands::Resolve {
            weather,
            reduced_motion,
            json,
        } => {
            let store = open_store(&config, cli.user.as_deref())?;
            let motion = ReducedMotion::pushed(config.display.prefers_reduced_motion);
            if reduced_motion {
                motion.push(true);
            }
            let accessibility = AccessibilitySignal {
                prefers_reduced_motion: motion.get(),
                system_scheme: config.display.system_scheme,
            };
            let seasonal = tone_for(weather.signal().as_ref(), weather.now(), &config.tone);
            let resolved = store.resolve(&accessibility, &seasonal);

            if json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                print!("{}", report::presentation(&resolved));
            }
            Ok(())
        }
        Commands::Show => {
            let store = open_store(&config, cli.user.as_deref())?;
            let records = serde_json::json!({
                "theme": store.theme(),
                "scene": store.scene(),
                "colors": store.colors(),
            });
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        }
        Commands::Set { record, fields } => {
            let mut store = open_store(&config, cli.user.as_deref())?;
            let patch = parse_fields(&fields)?;
            let rejected = match record {
                Record::Theme => store.update_theme(&patch).rejected,
                Record::Scene => store.update_scene(&patch).rejected,
                Record::Colors => store.update_colors(&patch).rejected,
            };
            for rejection in &rejected {
                eprintln!(
                    "rejected {} = {}: {}",
                    rejection.field, rejection.value, rejection.reason
                );
            }
            saved(&store)?;
            if !rejected.is_empty() {
                anyhow::bail!("{} of {} fields rejected", rejected.len(), patch.len());
            }
            Ok(())
        }
        Commands::Scene { id } => {
            let mut store = open_store(&config, cli.user.as_deref())?;
            if let Some(id) = id.as_deref() {
                let known = SceneCatalog::global()
                    .resolve(id, &store.scene().custom_scenes)
                    .is_some();
                if !known {
                    anyhow::bail!("Unknown scene `{id}`. Run `lantern scenes` to list them.");
                }
            }
            store.set_active_scene(id.as_deref());
            saved(&store)
        }
        Commands::ToggleMode => {
            let mut store = open_store(&config, cli.user.as_deref())?;
            let theme = store.toggle_color_mode(config.display.system_scheme);
            println!("color mode: {}", report::label(&theme.color_mode));
            saved(&store)
        }
        Commands::Reset { scope } => {
            let mut store = open_store(&config, cli.user.as_deref())?;
            match ResetScope::from(scope) {
                ResetScope::Theme => {
                    store.reset_theme();
                }
                ResetScope::Scene => {
                    store.reset_scene();
                }
                ResetScope::Colors => {
                    store.reset_colors();
                }
                ResetScope::All => store.reset(),
            }
            saved(&store)
        }
        Commands::Themes { category } => {
            let catalog = ThemeCatalog::global();
            let category = category
                .map(|id| report::parse_id::<ThemeCategory>("category", &id))
                .transpose()?;
            for &current in ThemeCategory::all() {
                if category.is_some_and(|wanted| wanted != current) {
                    continue;
                }
                println!("{}", current.display_name());
                for theme in catalog.by_category(current) {
                    println!("  {:<16} {}", theme.id, theme.description);
                }
            }
            Ok(())
        }
        Commands::Scenes { mood } => {
            let store = open_store(&config, cli.user.as_deref())?;
            let catalog = SceneCatalog::global();
            let custom = &store.scene().custom_scenes;
            let scenes: Vec<_> = match mood {
                Some(id) => {
                    let mood = report::parse_id::<SceneMood>("mood", &id)?;
                    catalog.by_mood(mood, custom).collect()
                }
                None => catalog.all().chain(custom.iter()).collect(),
            };
            for scene in scenes {
                let marker = if scene.is_custom { "*" } else { " " };
                println!("{marker} {:<18} {:<8} {}", scene.id, scene.mood, scene.name);
            }
            Ok(())
        }
        Commands::Wallpapers { mood } => {
            let wallpapers: Vec<_> = match mood {
                Some(id) => {
                    let mood = report::parse_id::<WallpaperMood>("mood", &id)?;
                    curated::by_mood(mood).collect()
                }
                None => curated::all().iter().collect(),
            };
            for wallpaper in wallpapers {
                println!(
                    "{:<22} {:<12} {:<10} {}",
                    wallpaper.id,
                    report::label(&wallpaper.mood),
                    wallpaper.wallpaper.kind(),
                    wallpaper.name
                );
            }
            Ok(())
        }
        Commands::Inspiration { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let inspiration = daily_inspiration(date);
            println!("\"{}\"\n  - {}", inspiration.quote, inspiration.author);
            Ok(())
        }
        Commands::Tone { weather } => {
            let seasonal = tone_for(weather.signal().as_ref(), weather.now(), &config.tone);
            print!("{}", report::seasonal(&seasonal));
            Ok(())
        }
        Commands::Watch {
            weather,
            interval,
            updates,
        } => {
            let mut tone = config.tone;
            if let Some(interval) = interval {
                tone.refresh_interval_secs = interval;
            }
            tracing::info!(
                interval_secs = tone.refresh_interval_secs,
                updates,
                "watching weather tone"
            );
            let refresher = ToneRefresher::spawn(FixedWeather(weather.signal()), tone);
            let mut receiver = refresher.subscribe();
            for _ in 0..updates {
                receiver
                    .changed()
                    .await
                    .context("Tone refresh stopped unexpectedly")?;
                let seasonal = receiver.borrow_and_update().clone();
                println!("[{}]", Local::now().format("%H:%M:%S"));
                print!("{}", report::seasonal(&seasonal));
            }
            refresher.shutdown().await;
            Ok(())
        }
    }
}

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("lantern={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn init(path: &Path, force: bool) -> Result<()> {
    let target = path.join(CONFIG_FILE);
    if target.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            target.display()
        );
    }
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    fs::write(&target, LanternConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!("Wrote {}", target.display());
    Ok(())
}

fn open_store(config: &LanternConfig, user: Option<&str>) -> Result<SettingsStore<FileBackend>> {
    let dir = config.storage.resolved_dir()?;
    let user = user.unwrap_or(&config.storage.user);
    let mut store =
        SettingsStore::new(FileBackend::new(&dir), SettingsKey::new(user)).with_sink(TracingSink);

    if store.load() == StoreState::Degraded {
        tracing::warn!(dir = %dir.display(), "settings storage unavailable, using defaults");
    }
    Ok(store)
}

/// Fail when the last write did not reach storage
fn saved(store: &SettingsStore<FileBackend>) -> Result<()> {
    if store.is_degraded() {
        anyhow::bail!(
            "Could not save settings under {}",
            store.backend().root().display()
        );
    }
    Ok(())
}

fn parse_fields(fields: &[String]) -> Result<Map<String, Value>> {
    fields
        .iter()
        .map(|field| {
            let (name, raw) = field
                .split_once('=')
                .with_context(|| format!("Expected FIELD=VALUE, got `{field}`"))?;
            Ok((name.trim().to_string(), report::field_value(raw)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn scene_mood_help_lists_real_moods() {
        use clap::CommandFactory;
        let mut command = Cli::command();
        let scenes = command.find_subcommand_mut("scenes").unwrap();
        let help = scenes
            .get_arguments()
            .find(|arg| arg.get_id() == "mood")
            .and_then(|arg| arg.get_help())
            .map(|help| help.to_string())
            .unwrap();

        let listed = help
            .split_once('(')
            .and_then(|(_, rest)| rest.split_once(')'))
            .map(|(list, _)| list)
            .unwrap();
        let moods: Vec<&str> = listed.split(", ").collect();
        assert_eq!(moods.len(), 4);
        for mood in moods {
            assert!(report::parse_id::<SceneMood>("mood", mood).is_ok(), "{mood}");
        }
    }

    #[test]
    fn fields_parse_into_a_patch() {
        let patch = parse_fields(&[
            "themeId=forest".to_string(),
            "customAccentColor=null".to_string(),
        ])
        .unwrap();
        assert_eq!(patch["themeId"], "forest");
        assert_eq!(patch["customAccentColor"], Value::Null);
        assert!(parse_fields(&["themeId".to_string()]).is_err());
    }

    #[test]
    fn weather_args_build_a_signal() {
        let cli = Cli::parse_from([
            "lantern",
            "tone",
            "--weather-code",
            "61",
            "--temp",
            "-3",
            "--sunset",
            "17:45",
            "--at",
            "2026-01-10T17:00:00",
        ]);
        let Commands::Tone { weather } = cli.command else {
            panic!("expected the tone command");
        };
        let signal = weather.signal().unwrap();
        assert!(signal.is_rainy);
        assert_eq!(signal.temperature_c, Some(-3.0));
        assert_eq!(signal.sunset, NaiveTime::from_hms_opt(17, 45, 0));

        let seasonal = tone_for(Some(&signal), weather.now(), &Default::default());
        assert!(seasonal.sunset_alert);
        assert_eq!(seasonal.minutes_to_sunset, Some(45));
    }

    #[test]
    fn settings_edits_persist_between_runs() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = LanternConfig::default();
        config.storage.dir = Some(dir.path().to_path_buf());

        let mut store = open_store(&config, Some("ada")).unwrap();
        store.update_theme(&parse_fields(&["themeId=ocean".to_string()]).unwrap());
        saved(&store).unwrap();

        let store = open_store(&config, Some("ada")).unwrap();
        assert_eq!(store.theme().theme_id, "ocean");
        let other = open_store(&config, None).unwrap();
        assert_eq!(other.theme().theme_id, "lantern");
    }
}
