// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented stage rendering
//!
//! Prints a fresh line only when something the operator can see changed,
//! so a full run reads as a log of the pipeline rather than a flood of
//! frames. JSON mode bypasses the theming and emits one snapshot per
//! frame.

use crate::strings::Strings;
use vapor_core::display::{format_hms, StackStatus, STEP_COUNT};
use vapor_core::Stage;
use vapor_engine::VentureSnapshot;

const BAR_WIDTH: usize = 24;

pub struct Renderer {
    strings: &'static Strings,
    json: bool,
    last_stage: Option<Stage>,
    last_generating: bool,
    last_votes: Option<u32>,
    last_percent: Option<u32>,
    last_step: Option<usize>,
    last_online: usize,
}

impl Renderer {
    pub fn new(strings: &'static Strings, json: bool) -> Self {
        Self {
            strings,
            json,
            last_stage: None,
            last_generating: false,
            last_votes: None,
            last_percent: None,
            last_step: None,
            last_online: 0,
        }
    }

    /// Render whatever changed since the previous frame
    pub fn frame(&mut self, snapshot: &VentureSnapshot) {
        if self.json {
            if let Ok(line) = serde_json::to_string(snapshot) {
                println!("{}", line);
            }
            return;
        }

        if self.last_stage != Some(snapshot.stage) {
            self.last_stage = Some(snapshot.stage);
            self.banner(snapshot);
        }

        match snapshot.stage {
            Stage::Voting => self.voting_line(snapshot),
            Stage::Approved => self.generating_line(snapshot),
            Stage::Building => self.building_lines(snapshot),
            Stage::Planning | Stage::Complete => {}
        }
    }

    fn banner(&mut self, snapshot: &VentureSnapshot) {
        let s = self.strings;
        match snapshot.stage {
            Stage::Voting => {
                println!();
                println!("== {} ==", s.voting_title);
                println!("   {}", s.voting_subtitle);
                println!("   {} - {}", s.business_name, s.business_pitch);
                println!("   [{}]", s.keywords.join(", "));
            }
            Stage::Approved => {
                println!();
                println!("== {} ==", s.approved_title);
                println!(
                    "   {} ({}: {}%)",
                    s.approved_subtitle, s.consensus_label, snapshot.consensus_percent
                );
            }
            Stage::Planning => {
                println!();
                println!("== {} ==", s.planning_title);
                println!("   {}:", s.stack_title);
                for item in &s.tech_stack {
                    println!("     {:<16} {}", item.name, item.tech);
                }
                println!("   {}:", s.steps_title);
                for (index, step) in s.development_steps.iter().enumerate() {
                    println!("     {}. {}", index + 1, step);
                }
                println!("   {}: {}", s.budget_label, snapshot.countdown);
            }
            Stage::Building => {
                println!();
                println!("== {} ==", s.building_title);
            }
            Stage::Complete => {
                println!();
                println!("== {} ==", s.complete_title);
                println!("   {}", s.complete_subtitle);
                println!("   {}: {}%", s.synthesis_label, snapshot.progress_percent);
                if let Some(elapsed) = snapshot.build_elapsed_secs {
                    println!("   {}: {}", s.elapsed_label, format_hms(elapsed));
                }
                println!("   {}: {}", s.modules_label, STEP_COUNT);
                println!("   {}", s.new_venture_hint);
            }
        }
    }

    fn voting_line(&mut self, snapshot: &VentureSnapshot) {
        if self.last_votes == Some(snapshot.votes) {
            return;
        }
        self.last_votes = Some(snapshot.votes);

        let label = if snapshot.votes >= snapshot.vote_capacity * 4 / 5 {
            self.strings.consensus_achieved
        } else {
            ""
        };
        println!(
            "   {} {:>2}/{} [{}] {}",
            self.strings.consensus_label,
            snapshot.votes,
            snapshot.vote_capacity,
            bar(snapshot.consensus_percent),
            label
        );
    }

    fn generating_line(&mut self, snapshot: &VentureSnapshot) {
        if snapshot.generating && !self.last_generating {
            println!("   {}", self.strings.configuring);
        }
        self.last_generating = snapshot.generating;
    }

    fn building_lines(&mut self, snapshot: &VentureSnapshot) {
        if self.last_step != Some(snapshot.step_index) {
            self.last_step = Some(snapshot.step_index);
            println!(
                "   {} {}/{} - {}",
                self.strings.step_label,
                snapshot.step_index + 1,
                STEP_COUNT,
                self.strings.development_steps[snapshot.step_index.min(STEP_COUNT - 1)]
            );
        }

        let online = snapshot
            .stack
            .iter()
            .filter(|status| **status == StackStatus::Completed)
            .count();
        for item in self.last_online..online {
            println!(
                "   {:<16} {}",
                self.strings.tech_stack[item].tech,
                self.strings.stack_status_label(StackStatus::Completed)
            );
        }
        self.last_online = online;

        if self.last_percent == Some(snapshot.progress_percent) {
            return;
        }
        self.last_percent = Some(snapshot.progress_percent);

        println!(
            "   {:>3}% [{}] {} {} - {}",
            snapshot.progress_percent,
            bar(snapshot.progress_percent),
            snapshot.countdown,
            self.strings.countdown_label,
            self.strings.process_messages[snapshot.message_index.min(6)]
        );
    }
}

fn bar(percent: u32) -> String {
    let filled = (percent as usize * BAR_WIDTH / 100).min(BAR_WIDTH);
    let mut bar = String::with_capacity(BAR_WIDTH);
    for _ in 0..filled {
        bar.push('#');
    }
    for _ in filled..BAR_WIDTH {
        bar.push('.');
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(0), ".".repeat(BAR_WIDTH));
        assert_eq!(bar(100), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(50).chars().filter(|c| *c == '#').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn bar_clamps_overflow() {
        assert_eq!(bar(400), "#".repeat(BAR_WIDTH));
    }
}
