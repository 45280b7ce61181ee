//! Command table and dispatch
//!
//! A [`Session`] owns everything a REPL needs: the response cache, the HTTP
//! client, the location pager and the Pokedex. Each input line is turned into
//! a [`Command`] and executed against it.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::cache::{get_or_fetch, ExpiringCache};
use crate::client::PokeApiClient;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, PageEnvelope, Pokemon};
use crate::pager::Pager;
use crate::pokedex::{attempt_catch, Pokedex};
use crate::repl::clean_input;

// == Commands ==
/// Every command the REPL understands.
///
/// Variant order matches [`COMMANDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    Cache,
    Exit,
}

/// Name, usage and help text of a command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub command: Command,
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Command table, in the order `help` lists it.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: Command::Help,
        name: "help",
        usage: "help",
        description: "Show available commands",
    },
    CommandSpec {
        command: Command::Map,
        name: "map",
        usage: "map",
        description: "Show the next page of location areas",
    },
    CommandSpec {
        command: Command::MapBack,
        name: "mapb",
        usage: "mapb",
        description: "Show the previous page of location areas",
    },
    CommandSpec {
        command: Command::Explore,
        name: "explore",
        usage: "explore <location-area>",
        description: "List the Pokemon found in a location area",
    },
    CommandSpec {
        command: Command::Catch,
        name: "catch",
        usage: "catch <pokemon>",
        description: "Throw a Pokeball at a Pokemon",
    },
    CommandSpec {
        command: Command::Inspect,
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Show details of a caught Pokemon",
    },
    CommandSpec {
        command: Command::Pokedex,
        name: "pokedex",
        usage: "pokedex",
        description: "List all caught Pokemon",
    },
    CommandSpec {
        command: Command::Cache,
        name: "cache",
        usage: "cache",
        description: "Show response cache statistics",
    },
    CommandSpec {
        command: Command::Exit,
        name: "exit",
        usage: "exit",
        description: "Close the Pokedex",
    },
];

impl Command {
    /// Looks a command up by its typed name.
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.command)
    }

    pub fn spec(self) -> &'static CommandSpec {
        &COMMANDS[self as usize]
    }
}

/// What the REPL should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Session ==
/// State carried across REPL commands.
pub struct Session<R: Rng = StdRng> {
    cache: ExpiringCache,
    client: PokeApiClient,
    pager: Pager,
    pokedex: Pokedex,
    rng: R,
}

impl Session<StdRng> {
    /// Builds a session from configuration. Must run inside a tokio runtime.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = PokeApiClient::new(config.api_base_url.as_str(), config.fetch_timeout())?;
        let cache = ExpiringCache::new(config.cache_ttl());
        Ok(Self::new(cache, client, StdRng::from_entropy()))
    }
}

impl<R: Rng> Session<R> {
    pub fn new(cache: ExpiringCache, client: PokeApiClient, rng: R) -> Self {
        let pager = Pager::new(client.location_areas_url());
        Self {
            cache,
            client,
            pager,
            pokedex: Pokedex::new(),
            rng,
        }
    }

    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    // == Execute ==
    /// Parses and runs one input line, writing its output to `out`.
    ///
    /// Blank lines do nothing; unknown commands print a notice. Any error is
    /// returned for the caller to report; the session itself stays usable.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };

        let Some(command) = Command::from_name(name) else {
            writeln!(out, "Unknown command: {name}. Type 'help' for a list of commands.")?;
            return Ok(Flow::Continue);
        };

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => {
                let page = self.pager.forward(&self.cache, &self.client).await?;
                print_page(&page, out)?;
            }
            Command::MapBack => {
                let page = self.pager.backward(&self.cache, &self.client).await?;
                print_page(&page, out)?;
            }
            Command::Explore => {
                let area = required_arg(command, args)?;
                self.explore(area, out).await?;
            }
            Command::Catch => {
                let name = required_arg(command, args)?;
                self.catch(name, out).await?;
            }
            Command::Inspect => {
                let name = required_arg(command, args)?;
                self.inspect(name, out)?;
            }
            Command::Pokedex => self.list_pokedex(out)?,
            Command::Cache => self.cache_stats(out).await?,
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for spec in COMMANDS {
            writeln!(out, "{}: {}", spec.usage, spec.description)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&self, area_name: &str, out: &mut W) -> Result<()> {
        let url = self.client.location_area_url(area_name);
        let area: LocationArea =
            get_or_fetch(&self.cache, &url, || self.client.fetch_json(&url)).await?;

        writeln!(out, "Exploring {}...", area.name)?;
        if area.pokemon_encounters.is_empty() {
            writeln!(out, "No Pokemon found.")?;
            return Ok(());
        }
        writeln!(out, "Found Pokemon:")?;
        for name in area.pokemon_names() {
            writeln!(out, " - {name}")?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Throwing a Pokeball at {name}...")?;
        let url = self.client.pokemon_url(name);
        let pokemon: Pokemon =
            get_or_fetch(&self.cache, &url, || self.client.fetch_json(&url)).await?;

        if attempt_catch(&pokemon, &mut self.rng) {
            info!(pokemon = %pokemon.name, "caught");
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.pokedex.add(pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let caught = self
            .pokedex
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;
        let pokemon = &caught.pokemon;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  - {}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        writeln!(out, "Caught at: {}", caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            return Err(PokedexError::EmptyPokedex);
        }
        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.names() {
            writeln!(out, " - {name}")?;
        }
        Ok(())
    }

    async fn cache_stats<W: Write>(&self, out: &mut W) -> Result<()> {
        let stats = self.cache.stats().await;
        writeln!(out, "Cached responses: {}", stats.total_entries)?;
        writeln!(out, "Hits: {}", stats.hits)?;
        writeln!(out, "Misses: {} ({} stale)", stats.misses, stats.stale_reads)?;
        writeln!(out, "Swept: {}", stats.swept)?;
        writeln!(out, "Hit rate: {:.1}%", stats.hit_rate() * 100.0)?;
        writeln!(
            out,
            "TTL: {}s (sweep {})",
            self.cache.ttl().await.as_secs(),
            if self.cache.is_sweeping() { "running" } else { "stopped" }
        )?;
        Ok(())
    }
}

fn required_arg<'a>(command: Command, args: &'a [String]) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| PokedexError::MissingArgument(command.spec().usage.to_string()))
}

fn print_page<W: Write>(page: &PageEnvelope, out: &mut W) -> Result<()> {
    for name in page.names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}
