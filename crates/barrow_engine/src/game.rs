//! The game state and command dispatcher.
//!
//! [`Game`] is the single mutation path of the system: one submitted line is
//! parsed, possibly preceded by a combat round, then dispatched against the
//! world. Every outcome - including every failed lookup - is narration
//! through the [`Renderer`] seam, never an error.

use barrow_parser::{CommandParser, ParsedCommand};
use barrow_parser::vocabulary::ALL_NOUN;
use barrow_world::{Direction, RoomId, World};

use crate::combat::{self, Attacker, Defender};
use crate::dice::{Dice, SeededDice};
use crate::history::CommandHistory;
use crate::render::{Renderer, SoundCue};

/// Flavor lines for WAIT, picked uniformly.
pub const WAIT_LINES: [&str; 4] = [
    "YOU LOITER.",
    "YOU WAIT FOR THE GAME TO BEAT ITSELF.",
    "*WHISTLING*",
    "MAYBE IF YOU WAIT LONG ENOUGH, YOU'LL WIN. MAYBE.",
];

fn half_understood(verb: &str) -> String {
    format!("I UNDERSTOOD YOU AS FAR AS WANTING TO {verb}.")
}

/// The whole game: world, parser, dice, history, transcript, combat mode.
#[derive(Clone, Debug)]
pub struct Game<D: Dice = SeededDice> {
    world: World,
    parser: CommandParser,
    history: CommandHistory,
    dice: D,
    transcript: Vec<String>,
    combat: bool,
    defeat_room: RoomId,
}

impl Game<SeededDice> {
    /// Creates a game over the given world with seeded production dice.
    #[must_use]
    pub fn new(world: World, defeat_room: RoomId, seed: u64) -> Self {
        Self::with_dice(world, defeat_room, SeededDice::new(seed))
    }
}

impl<D: Dice> Game<D> {
    /// Creates a game with any dice implementation.
    #[must_use]
    pub fn with_dice(world: World, defeat_room: RoomId, dice: D) -> Self {
        let mut parser = CommandParser::new();
        parser.rebuild_nouns(&world);
        Self {
            world,
            parser,
            history: CommandHistory::new(),
            dice,
            transcript: Vec::new(),
            combat: false,
            defeat_room,
        }
    }

    /// Shared access to the world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Shared access to the parser (and so the current vocabulary).
    #[must_use]
    pub fn parser(&self) -> &CommandParser {
        &self.parser
    }

    /// The command history, for frontends that implement recall keys.
    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    /// Whether combat mode is on.
    #[must_use]
    pub fn in_combat(&self) -> bool {
        self.combat
    }

    /// Everything narrated so far, oldest first. Frontends page over this;
    /// scroll position is theirs to keep.
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Narrates the opening view of the current room.
    pub fn intro(&mut self, out: &mut dyn Renderer) {
        let description = self.world.current_room().description.clone();
        self.say(out, &description);
    }

    /// Handles one submitted line of input.
    ///
    /// An empty line does nothing at all - no history entry, no combat
    /// round, no narration. Any other line is recorded, triggers a combat
    /// round first when combat mode is on, and is then dispatched.
    pub fn handle_line(&mut self, input: &str, out: &mut dyn Renderer) {
        let Some(command) = self.parser.parse(input) else {
            return;
        };
        self.history.record(input);
        if self.combat {
            self.combat_round(out);
        }
        self.dispatch(&command, out);
    }

    fn say(&mut self, out: &mut dyn Renderer, text: &str) {
        self.transcript.push(text.to_string());
        out.narrate(text);
    }

    fn dispatch(&mut self, command: &ParsedCommand, out: &mut dyn Renderer) {
        let Some(verb) = command.verb.as_deref() else {
            self.say(out, "THAT'S NOT A VERB I RECOGNIZE.");
            return;
        };
        match command.noun.as_deref() {
            None => self.dispatch_bare(verb, out),
            Some(noun) => self.dispatch_object(verb, noun, out),
        }
    }

    /// Verbs that work without an object.
    fn dispatch_bare(&mut self, verb: &str, out: &mut dyn Renderer) {
        match verb {
            "LOOK" => {
                let description = self.world.current_room().description.clone();
                self.say(out, &description);
            }
            "INVENTORY" | "I" => {
                let line = self.inventory_line();
                self.say(out, &line);
                out.sound(SoundCue::OpenInventory);
            }
            "WAIT" => {
                let line = WAIT_LINES[self.dice.pick(WAIT_LINES.len())];
                self.say(out, line);
            }
            "SIT" => {
                if self.world.player.sitting {
                    self.say(
                        out,
                        "YOU ARE ALREADY SITTING. ARE YOU TRYING TO PHASE THROUGH THE GROUND?",
                    );
                } else {
                    self.world.player.sitting = true;
                    self.say(out, "YOU SIT DOWN.");
                }
            }
            "STAND" => {
                if self.world.player.sitting {
                    self.world.player.sitting = false;
                    self.say(out, "YOU STAND UP.");
                } else if self.world.player.character.health >= 50 {
                    self.say(out, "YOU HAVE EXCELLENT POSTURE.");
                } else {
                    self.say(out, "YOU FIGHT THE URGE TO HUNCH OVER IN PAIN.");
                }
            }
            "SLEEP" => self.say(out, "NOW IS NOT THE TIME FOR A NAP."),
            _ => {
                let line = half_understood(verb);
                self.say(out, &line);
            }
        }
    }

    /// Verbs applied to a recognized noun.
    fn dispatch_object(&mut self, verb: &str, noun: &str, out: &mut dyn Renderer) {
        match verb {
            "EXAMINE" => self.examine(noun, out),
            "TAKE" => self.take(noun, out),
            "EQUIP" => self.equip(noun, out),
            "ATTACK" => self.attack(noun, out),
            "DROP" => self.drop_item(noun, out),
            "MOVE" => self.walk(noun, out),
            _ => {
                let line = half_understood(verb);
                self.say(out, &line);
            }
        }
    }

    /// Search order: room items, inventory, held slot, NPCs.
    fn examine(&mut self, noun: &str, out: &mut dyn Renderer) {
        let player = &self.world.player.character;
        let description = self
            .world
            .current_room()
            .items
            .iter()
            .chain(player.inventory.iter())
            .chain(player.holding.iter())
            .find(|item| item.name == noun)
            .map(|item| item.description.clone())
            .or_else(|| {
                self.world
                    .npcs
                    .iter()
                    .find(|npc| npc.name == noun)
                    .map(|npc| npc.description.clone())
            });

        match description {
            Some(description) => self.say(out, &description),
            None => self.say(out, "YOU SEE NO SUCH THING."),
        }
    }

    fn take(&mut self, noun: &str, out: &mut dyn Renderer) {
        if let Some(name) = self.world.take_from_room(noun) {
            let line = format!("YOU TAKE THE {name}.");
            self.say(out, &line);
            return;
        }
        let npc_owned = self
            .world
            .npcs
            .iter()
            .any(|npc| npc.character.inventory.iter().any(|item| item.name == noun));
        if npc_owned {
            self.say(out, "NO GRABSIES.");
        } else {
            self.say(out, "YOU CAN'T SEE ANY SUCH THING.");
        }
    }

    fn equip(&mut self, noun: &str, out: &mut dyn Renderer) {
        if self.world.player.character.hold(noun) {
            let line = format!("YOU ARE NOW HOLDING THE {noun}.");
            self.say(out, &line);
        } else {
            self.say(
                out,
                "YOU DON'T HAVE ANY SUCH THING IN YOUR INVENTORY, SO YOU CAN'T EQUIP IT.",
            );
        }
    }

    fn attack(&mut self, noun: &str, out: &mut dyn Renderer) {
        let Some(index) = self.world.npc_index(noun) else {
            self.say(out, "YOU SEE NO SUCH TARGET.");
            return;
        };

        if !self.world.npcs[index].hostile {
            self.world.npcs[index].hostile = true;
            let line = format!("{} IS NOW HOSTILE.", self.world.npcs[index].name);
            self.say(out, &line);
        }

        let narration = {
            let world = &mut self.world;
            let npc = &mut world.npcs[index];
            combat::melee_attack(
                Attacker {
                    name: None,
                    holding: world.player.character.holding.as_ref(),
                },
                Defender {
                    name: Some(&npc.name),
                    health: &mut npc.character.health,
                    armor_class: npc.character.armor_class,
                },
                &mut self.dice,
            )
        };
        self.say(out, &narration);
        self.combat = true;
    }

    fn drop_item(&mut self, noun: &str, out: &mut dyn Renderer) {
        if noun == ALL_NOUN {
            for name in self.world.drop_all_to_room() {
                let line = format!("YOU DROP THE {name}.");
                self.say(out, &line);
            }
            return;
        }
        if let Some(name) = self.world.drop_to_room(noun) {
            let line = format!("YOU DROP THE {name}.");
            self.say(out, &line);
        } else {
            self.say(out, "YOU AREN'T CARRYING ANY SUCH THING, SO YOU CAN'T DROP IT.");
        }
    }

    fn walk(&mut self, noun: &str, out: &mut dyn Renderer) {
        let Some(direction) = Direction::from_token(noun) else {
            let line = half_understood("MOVE");
            self.say(out, &line);
            return;
        };
        if self.world.move_player(direction).is_some() {
            self.parser.rebuild_nouns(&self.world);
            let description = self.world.current_room().description.clone();
            self.say(out, &description);
        } else {
            self.say(out, "YOU WALK INTO A WALL.");
        }
    }

    /// One combat round: every hostile NPC in the room makes a spell attack
    /// on the player. Defeat clamps the player back to 1 health, ends
    /// combat, and relocates them to the defeat room.
    fn combat_round(&mut self, out: &mut dyn Renderer) {
        let here = self.world.current();
        for index in 0..self.world.npcs.len() {
            let acts = {
                let npc = &self.world.npcs[index];
                npc.hostile && npc.character.location == here
            };
            if acts {
                let narration = {
                    let world = &mut self.world;
                    let npc = &world.npcs[index];
                    combat::spell_attack(
                        Attacker {
                            name: Some(&npc.name),
                            holding: npc.character.holding.as_ref(),
                        },
                        Defender {
                            name: None,
                            health: &mut world.player.character.health,
                            armor_class: world.player.character.armor_class,
                        },
                    )
                };
                self.say(out, &narration);
            }
            if self.world.player.character.health <= 0 {
                self.world.player.character.health = 1;
                self.combat = false;
                self.say(out, "YOU ARE DEAD. SEE YOU IN HELL.");
                let defeat = self.defeat_room;
                self.world.enter(defeat);
                self.parser.rebuild_nouns(&self.world);
                return;
            }
        }
    }

    fn inventory_line(&self) -> String {
        let names: Vec<&str> = self.world.player.character.carried_names().collect();
        format!("YOU ARE CARRYING: {}", names.join(", "))
    }
}
