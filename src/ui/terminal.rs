//! Line-based terminal front end
//!
//! Everything reads from a `BufRead` and writes to a `Write` so the whole
//! menu loop can be driven from a script in tests.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};

use crate::campaign::battle::CombatOutcome;
use crate::campaign::map::{TerritoryMap, TERRITORY_COUNT};
use crate::campaign::mission::Mission;
use crate::campaign::session::{GameSession, SessionStatus};
use crate::core::dice::RandomSource;
use crate::core::error::Result;
use crate::core::types::{Faction, TerritoryId};

const RULE: &str = "===========================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Attack,
    CheckVictory,
    Quit,
}

#[derive(Debug, Clone, Copy)]
pub struct TerminalOptions {
    pub clear_screen: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim().parse::<u32>().ok()? {
        1 => Some(MenuChoice::Attack),
        2 => Some(MenuChoice::CheckVictory),
        0 => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Parse a 1-based territory number from the map table
pub fn parse_territory_number(input: &str) -> Option<TerritoryId> {
    let number = input.trim().parse::<usize>().ok()?;
    TerritoryId::from_display(number).filter(|id| id.0 < TERRITORY_COUNT)
}

pub fn clear_screen(out: &mut impl Write) -> std::io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

fn header(out: &mut impl Write, title: &str) -> std::io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{title:^43}")?;
    writeln!(out, "{RULE}")
}

pub fn render_map(out: &mut impl Write, map: &TerritoryMap) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "    {:<25} {:<15} {:<10}", "TERRITORY", "ARMY", "TROOPS")?;
    writeln!(out, "    {:-<25} {:-<15} {:-<10}", "", "", "")?;
    for (id, territory) in map.iter() {
        // Player rows are marked
        let marker = if territory.owner == Faction::Player { '>' } else { ' ' };
        writeln!(
            out,
            "{marker}{:>2} {:<25} {:<15} {:<10}",
            id.display_number(),
            territory.name,
            territory.owner.display_name(),
            territory.troops
        )?;
    }
    Ok(())
}

pub fn render_mission(out: &mut impl Write, mission: Option<&Mission>) -> std::io::Result<()> {
    match mission {
        Some(mission) => writeln!(out, "{}", mission.description),
        None => writeln!(out, "(no mission)"),
    }
}

pub fn render_menu(out: &mut impl Write) -> std::io::Result<()> {
    header(out, "MAIN MENU")?;
    writeln!(out, "1. Attack phase")?;
    writeln!(out, "2. Check victory condition")?;
    writeln!(out, "0. Quit game")?;
    writeln!(out, "{RULE}")
}

fn join_dice(dice: &[u32]) -> String {
    dice.iter()
        .map(|d| format!("[{d}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_combat(out: &mut impl Write, outcome: &CombatOutcome) -> std::io::Result<()> {
    writeln!(out)?;
    header(out, "ATTACK SIMULATION")?;
    writeln!(
        out,
        "{} ({}) attacks {} ({})",
        outcome.attacker_name, outcome.attacker_owner, outcome.defender_name, outcome.defender_owner
    )?;
    writeln!(out)?;
    writeln!(out, "Attacker dice: {}", join_dice(&outcome.roll.attacker))?;
    writeln!(out, "Defender dice: {}", join_dice(&outcome.roll.defender))?;
    writeln!(out)?;
    writeln!(out, "RESULT:")?;
    writeln!(out, "- Troops lost by attacker: {}", outcome.attacker_losses)?;
    writeln!(out, "- Troops lost by defender: {}", outcome.defender_losses)?;
    writeln!(out)?;

    if outcome.conquered {
        writeln!(out, "VICTORY! {} was conquered!", outcome.defender_name)?;
        writeln!(out, "{} troop(s) moved into the new territory.", outcome.troops_moved)?;
    }

    writeln!(out)?;
    writeln!(out, "CURRENT SITUATION:")?;
    writeln!(out, "{}: {} troops", outcome.attacker_name, outcome.attacker_troops)?;
    let holder = if outcome.conquered {
        outcome.attacker_owner
    } else {
        outcome.defender_owner
    };
    writeln!(
        out,
        "{}: {} troops ({})",
        outcome.defender_name, outcome.defender_troops, holder
    )
}

pub fn render_victory(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    header(out, "CONGRATULATIONS! YOU WON!")?;
    writeln!(out, "You accomplished your mission!")?;
    writeln!(out)
}

pub fn render_not_yet(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    header(out, "MISSION NOT ACCOMPLISHED")?;
    writeln!(out, "Keep trying to accomplish your mission.")?;
    writeln!(out)
}

/// Drives the menu loop over arbitrary input and output
pub struct Terminal<'a, R, W> {
    input: &'a mut R,
    out: &'a mut W,
    options: TerminalOptions,
}

impl<'a, R: BufRead, W: Write> Terminal<'a, R, W> {
    pub fn new(input: &'a mut R, out: &'a mut W, options: TerminalOptions) -> Self {
        Self { input, out, options }
    }

    /// Next trimmed line, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// Wait for ENTER; `false` at end of input
    fn pause(&mut self) -> Result<bool> {
        Ok(self.prompt("Press ENTER to continue...")?.is_some())
    }

    fn clear(&mut self) -> Result<()> {
        if self.options.clear_screen {
            clear_screen(self.out)?;
        }
        Ok(())
    }

    /// Ask for a territory until a valid number arrives
    fn prompt_territory(&mut self, label: &str) -> Result<Option<TerritoryId>> {
        loop {
            let text = format!("\nSelect the {label} territory (1-{TERRITORY_COUNT}): ");
            let Some(line) = self.prompt(&text)? else {
                return Ok(None);
            };
            match parse_territory_number(&line) {
                Some(id) => return Ok(Some(id)),
                None => writeln!(self.out, "Invalid territory!")?,
            }
        }
    }

    /// One attack phase; returns `false` if input ran out
    fn attack_phase<S: RandomSource>(&mut self, session: &mut GameSession<S>) -> Result<bool> {
        self.clear()?;
        header(self.out, "ATTACK PHASE")?;
        render_map(self.out, session.map())?;

        let Some(origin) = self.prompt_territory("ORIGIN")? else {
            return Ok(false);
        };
        let Some(destination) = self.prompt_territory("DESTINATION")? else {
            return Ok(false);
        };

        match session.attack(origin, destination) {
            Ok(outcome) => render_combat(self.out, &outcome)?,
            Err(e) if e.is_rejected_order() => writeln!(self.out, "{e}")?,
            Err(e) => return Err(e),
        }
        writeln!(self.out)?;
        self.pause()
    }

    /// Play until victory, quit, or end of input
    pub fn run<S: RandomSource>(&mut self, session: &mut GameSession<S>) -> Result<()> {
        header(self.out, "STRATEGIC WAR - CONQUEST")?;
        writeln!(self.out)?;
        writeln!(self.out, "You command the {} army.", Faction::Player)?;
        writeln!(self.out, "Your secret mission is:")?;
        render_mission(self.out, session.mission())?;
        writeln!(self.out)?;

        let mut running = self.pause()?;
        while running && !session.is_over() {
            self.clear()?;
            header(self.out, "CURRENT GAME MAP")?;
            render_map(self.out, session.map())?;
            writeln!(self.out)?;
            header(self.out, "YOUR MISSION")?;
            render_mission(self.out, session.mission())?;
            writeln!(self.out)?;
            render_menu(self.out)?;

            let Some(line) = self.prompt("\nChoose an option: ")? else {
                break;
            };

            running = match parse_menu_choice(&line) {
                Some(MenuChoice::Attack) => {
                    let more = self.attack_phase(session)?;
                    if session.is_over() {
                        render_victory(self.out)?;
                    }
                    more
                }
                Some(MenuChoice::CheckVictory) => {
                    if session.check_victory() == SessionStatus::Victory {
                        render_victory(self.out)?;
                    } else {
                        render_not_yet(self.out)?;
                    }
                    self.pause()?
                }
                Some(MenuChoice::Quit) => {
                    writeln!(self.out, "Ending the game...")?;
                    false
                }
                None => {
                    writeln!(self.out, "Invalid option! Try again.")?;
                    self.pause()?
                }
            };
        }

        writeln!(self.out, "\nThanks for playing!")?;
        Ok(())
    }
}

/// Run a session on the given streams
pub fn play<S, R, W>(
    session: &mut GameSession<S>,
    input: &mut R,
    out: &mut W,
    options: TerminalOptions,
) -> Result<()>
where
    S: RandomSource,
    R: BufRead,
    W: Write,
{
    Terminal::new(input, out, options).run(session)
}
