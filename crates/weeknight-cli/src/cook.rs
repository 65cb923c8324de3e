//! Interactive cooking session.
//!
//! One task drives everything: `tokio::select!` waits on the next input line
//! and on the active step's timer. A paused timer never ticks, so that
//! branch simply stays pending.

use std::{str::FromStr, sync::Arc};

use anyhow::{Context, Result};
use log::info;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, Lines},
    task::JoinHandle,
};
use weeknight_core::{
    cook::{
        load_recipe, play_cue, CookingSession, EffectDispatcher, IntervalTicker, Sequencer, Stage,
        TerminalBell, Tick,
    },
    display::{OperationStatus, StepView, TimelineView, TimerView},
    flags::FeedbackConfig,
    models::{LeftoverChoice, Rating},
};

use crate::{
    cli::{settle, Cli, CookArgs},
    renderer::TerminalRenderer,
};

const COOK_HELP: &str = "Commands: `next`, `prev`, `timer`, `pause`, `reset`, `+N`/`-N` \
                         (seconds), `repeat`, `done`, `stop`";

/// One line typed during cooking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CookInput {
    Start,
    Next,
    Prev,
    Timer,
    Pause,
    Reset,
    AddTime(i64),
    Repeat,
    Done,
    Stop,
    Help,
}

impl FromStr for CookInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "start" => Ok(CookInput::Start),
            "next" | "n" => Ok(CookInput::Next),
            "prev" | "p" | "back" => Ok(CookInput::Prev),
            "timer" | "t" | "go" => Ok(CookInput::Timer),
            "pause" => Ok(CookInput::Pause),
            "reset" => Ok(CookInput::Reset),
            "repeat" | "r" => Ok(CookInput::Repeat),
            "done" | "finish" => Ok(CookInput::Done),
            "stop" | "quit" | "q" => Ok(CookInput::Stop),
            "help" | "?" | "" => Ok(CookInput::Help),
            other if other.starts_with('+') || other.starts_with('-') => other
                .parse::<i64>()
                .map(CookInput::AddTime)
                .map_err(|_| format!("Invalid time adjustment: {other}")),
            other => Err(format!("Unknown command: {other}")),
        }
    }
}

/// Answer to the rating prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RatingAnswer {
    Rate(Rating, bool),
    Skip,
}

impl FromStr for RatingAnswer {
    type Err = String;

    /// `good`, `neutral` or `bad`, optionally followed by `kids`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(RatingAnswer::Skip);
        };
        if first.eq_ignore_ascii_case("skip") {
            return Ok(RatingAnswer::Skip);
        }
        let rating: Rating = first.parse()?;
        let kids_disliked = words.any(|w| w.eq_ignore_ascii_case("kids"));
        Ok(RatingAnswer::Rate(rating, kids_disliked))
    }
}

/// Answer to the leftover prompt; `None` skips.
fn parse_leftover_answer(s: &str) -> Result<Option<LeftoverChoice>, String> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("skip") {
        return Ok(None);
    }
    s.parse().map(Some)
}

/// How the cooking loop ended.
enum Outcome {
    Completed(Sequencer),
    Stopped,
}

struct CookRun<'a> {
    cli: &'a Cli,
    dispatcher: EffectDispatcher,
    handles: Vec<JoinHandle<()>>,
}

impl<'a> CookRun<'a> {
    fn dispatch(&mut self, effects: Vec<weeknight_core::cook::Effect>) {
        self.handles.extend(self.dispatcher.dispatch(effects));
    }

    fn say(&self, text: &str) -> Result<()> {
        self.cli.renderer.line(text)
    }

    async fn cooking<R>(
        &mut self,
        session: &mut CookingSession<IntervalTicker>,
        config: FeedbackConfig,
        lines: &mut Lines<R>,
    ) -> Result<Outcome>
    where
        R: AsyncBufRead + Unpin,
    {
        self.dispatch(session.start());
        self.cli.renderer.show(&StepView(session))?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("Failed to read input")? else {
                        return Ok(Outcome::Stopped);
                    };
                    let input = match line.parse::<CookInput>() {
                        Ok(input) => input,
                        Err(e) => {
                            self.say(&format!("{e}. {COOK_HELP}"))?;
                            continue;
                        }
                    };
                    match input {
                        CookInput::Next | CookInput::Prev => {
                            let moved = if input == CookInput::Next {
                                session.next()
                            } else {
                                session.prev()
                            };
                            if moved {
                                self.cli.renderer.show(&StepView(session))?;
                            } else if input == CookInput::Next {
                                self.say("This is the last step. Type `done` when you're finished.")?;
                            } else {
                                self.say("Already at the first step.")?;
                            }
                        }
                        CookInput::Timer => {
                            if session.timer().remaining() == 0 {
                                self.say("No time on the timer for this step.")?;
                            } else {
                                session.timer_mut().start();
                                self.say(&TimerView(session.timer()).to_string())?;
                            }
                        }
                        CookInput::Pause => {
                            session.timer_mut().pause();
                            self.say(&TimerView(session.timer()).to_string())?;
                        }
                        CookInput::Reset => {
                            session.timer_mut().reset(None);
                            self.say(&TimerView(session.timer()).to_string())?;
                        }
                        CookInput::AddTime(delta) => {
                            session.timer_mut().add_time(delta);
                            self.say(&TimerView(session.timer()).to_string())?;
                        }
                        CookInput::Start | CookInput::Repeat => {
                            self.cli.renderer.show(&StepView(session))?;
                        }
                        CookInput::Done => match session.complete(config) {
                            Ok((sequencer, effects)) => {
                                self.dispatch(effects);
                                return Ok(Outcome::Completed(sequencer));
                            }
                            Err(_) => {
                                self.say("Finish the remaining steps first (`next`).")?;
                            }
                        },
                        CookInput::Stop => return Ok(Outcome::Stopped),
                        CookInput::Help => self.say(COOK_HELP)?,
                    }
                }
                tick = session.timer_mut().next_tick() => match tick {
                    Tick::Finished => self.say("⏰ Time's up!")?,
                    Tick::Counted { remaining } if remaining % 60 == 0 || remaining <= 5 => {
                        self.say(&TimerView(session.timer()).to_string())?;
                    }
                    _ => {}
                },
            }
        }
    }

    async fn feedback<R>(&mut self, mut sequencer: Sequencer, lines: &mut Lines<R>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let cli = self.cli;
        let renderer = &cli.renderer;
        while !sequencer.is_done() {
            match sequencer.stage() {
                Stage::Rating => {
                    self.say(&format!(
                        "How was it? [{} / {} / {}] Add `kids` if the kids didn't like it, or `skip`.",
                        Rating::Good.with_emoji(),
                        Rating::Neutral.with_emoji(),
                        Rating::Bad.with_emoji(),
                    ))?;
                    let effects = match read_answer(renderer, lines, str::parse::<RatingAnswer>).await? {
                        Some(RatingAnswer::Rate(rating, kids)) => sequencer.submit_rating(rating, kids)?,
                        Some(RatingAnswer::Skip) | None => sequencer.skip_rating()?,
                    };
                    self.dispatch(effects);
                }
                Stage::Leftover => {
                    self.say("Any leftovers? [0 / 1 / 2+ / 2-10 servings] or `skip`.")?;
                    let effects = match read_answer(renderer, lines, parse_leftover_answer).await? {
                        Some(Some(choice)) => sequencer.submit_leftover(choice)?,
                        Some(None) | None => sequencer.skip_leftover()?,
                    };
                    self.dispatch(effects);
                }
                Stage::Done => break,
            }
        }

        if let Some(servings) = sequencer.leftover_servings().filter(|s| *s > 0) {
            self.cli.renderer.show(&OperationStatus::success(format!(
                "Noted {servings} serving(s) of leftovers"
            )))?;
        }
        self.say("Enjoy your meal!")
    }
}

/// Reads lines until one parses, explaining each rejected answer. `None` at
/// end of input.
async fn read_answer<R, T>(
    renderer: &TerminalRenderer,
    lines: &mut Lines<R>,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<Option<T>>
where
    R: AsyncBufRead + Unpin,
{
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        match parse(&line) {
            Ok(answer) => return Ok(Some(answer)),
            Err(e) => renderer.line(&format!("{e}. Try again."))?,
        }
    }
    Ok(None)
}

impl Cli {
    /// Runs a cooking session reading commands from stdin.
    pub async fn cook(&self, args: CookArgs) -> Result<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        self.cook_with_input(args, stdin.lines()).await
    }

    async fn cook_with_input<R>(&self, args: CookArgs, mut lines: Lines<R>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let recipe_id = args.recipe_id;
        let (loaded, config) = tokio::join!(
            load_recipe(self.backend.as_ref(), &recipe_id, self.token()),
            FeedbackConfig::resolve(self.backend.as_ref(), self.token()),
        );
        let loaded = loaded.with_context(|| {
            format!(
                "Could not load recipe {recipe_id}. Try again, or run `wk suggest` to pick another recipe"
            )
        })?;

        let mut run = CookRun {
            cli: self,
            dispatcher: EffectDispatcher::new(
                Arc::clone(&self.backend),
                self.identity.clone(),
                recipe_id.clone(),
                Some(loaded.recipe.title.clone()),
            ),
            handles: Vec::new(),
        };

        self.renderer.show(&loaded.recipe)?;
        self.renderer.show(&TimelineView(&loaded.timeline))?;
        run.say("Type `start` to begin cooking or `stop` to leave.")?;

        let mut started = false;
        while let Some(line) = lines.next_line().await.context("Failed to read input")? {
            match line.parse::<CookInput>() {
                Ok(CookInput::Start) => {
                    started = true;
                    break;
                }
                Ok(CookInput::Stop) => break,
                _ => run.say("Type `start` to begin cooking or `stop` to leave.")?,
            }
        }
        if !started {
            return Ok(());
        }

        let mut session = CookingSession::new(loaded, IntervalTicker::default())
            .on_timer_complete(|| play_cue(&TerminalBell));
        info!("Cooking {recipe_id}");

        let outcome = run.cooking(&mut session, config, &mut lines).await;
        // The timer's interval is released here, whatever the outcome.
        drop(session);

        let result = match outcome {
            Ok(Outcome::Completed(sequencer)) => run.feedback(sequencer, &mut lines).await,
            Ok(Outcome::Stopped) => run.say("Cooking stopped."),
            Err(e) => Err(e),
        };
        settle(run.handles).await;
        result
    }
}
