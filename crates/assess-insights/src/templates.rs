//! Recommendation template table keyed by (dimension, band, audience).

use assess_core::{Band, Dimension, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Who a recommendation is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Individual,
    Team,
}

/// Style of a candidate phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhraseKind {
    /// Something to do this week
    QuickWin,
    /// A habit or experiment to try
    Habit,
}

/// A candidate phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub text: String,
    pub kind: PhraseKind,
}

/// One row of a serialized template table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRow {
    pub dimension: Dimension,
    pub band: Band,
    pub audience: Audience,
    pub kind: PhraseKind,
    pub text: String,
}

/// Ordered candidate phrases per (dimension, band, audience)
#[derive(Debug, Clone, Default)]
pub struct TemplateTable {
    entries: HashMap<(Dimension, Band, Audience), Vec<Phrase>>,
}

impl TemplateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate; order of insertion is order of preference
    pub fn insert(&mut self, dimension: Dimension, band: Band, audience: Audience, phrase: Phrase) {
        self.entries
            .entry((dimension, band, audience))
            .or_default()
            .push(phrase);
    }

    pub fn with(mut self, dimension: Dimension, band: Band, audience: Audience, kind: PhraseKind, text: &str) -> Self {
        self.insert(
            dimension,
            band,
            audience,
            Phrase {
                text: text.to_string(),
                kind,
            },
        );
        self
    }

    /// Candidates for a key; empty when the table has a gap
    pub fn candidates(&self, dimension: Dimension, band: Band, audience: Audience) -> &[Phrase] {
        self.entries
            .get(&(dimension, band, audience))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_rows(rows: impl IntoIterator<Item = TemplateRow>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.insert(
                row.dimension,
                row.band,
                row.audience,
                Phrase {
                    text: row.text,
                    kind: row.kind,
                },
            );
        }
        table
    }

    /// Parse a JSON array of [`TemplateRow`]
    pub fn from_json(json: &str) -> Result<Self> {
        let rows: Vec<TemplateRow> = serde_json::from_str(json)?;
        if rows.iter().any(|r| r.text.trim().is_empty()) {
            return Err(Error::Configuration("template rows must have text".to_string()));
        }
        Ok(Self::from_rows(rows))
    }

    /// The shipped phrase table
    pub fn builtin() -> Self {
        Self::from_rows(builtin_rows().iter().map(|(dimension, band, audience, kind, text)| TemplateRow {
            dimension: *dimension,
            band: *band,
            audience: *audience,
            kind: *kind,
            text: text.to_string(),
        }))
    }
}

type Row = (Dimension, Band, Audience, PhraseKind, &'static str);

fn builtin_rows() -> &'static [Row] {
    use Audience::*;
    use Band::*;
    use Dimension::*;
    use PhraseKind::*;

    const ROWS: &[Row] = &[
        // Openness
        (Openness, Lower, Individual, QuickWin, "Pick one small process you use daily and try a different approach for a week."),
        (Openness, Lower, Individual, Habit, "Ask a colleague from another team how they solve a problem you share."),
        (Openness, Balanced, Individual, QuickWin, "Set aside thirty minutes this week to explore one idea outside your usual scope."),
        (Openness, Balanced, Individual, Habit, "Decide up front when an experiment ends so exploring never stalls delivery."),
        (Openness, Higher, Individual, QuickWin, "Write down which of your current ideas you will finish before starting a new one."),
        (Openness, Higher, Individual, Habit, "Pair each new idea with a simple test of whether it is worth pursuing."),
        (Openness, Lower, Team, QuickWin, "Run a short retro on one routine process and try a single change."),
        (Openness, Lower, Team, Habit, "Invite an outside guest to one team meeting a month for fresh perspective."),
        (Openness, Balanced, Team, QuickWin, "Agree on one area where the team will trial a new approach this month."),
        (Openness, Higher, Team, QuickWin, "Keep an idea backlog and review it monthly instead of acting on every idea."),
        (Openness, Higher, Team, Habit, "Name an owner for finishing work, not just for starting it."),

        // Conscientiousness
        (Conscientiousness, Lower, Individual, QuickWin, "List your three most important tasks each morning before opening messages."),
        (Conscientiousness, Lower, Individual, Habit, "Set a calendar reminder two days before every deadline."),
        (Conscientiousness, Balanced, Individual, QuickWin, "Review your commitments on Friday and drop one that no longer matters."),
        (Conscientiousness, Balanced, Individual, Habit, "Keep a single running list so tasks do not live in several places."),
        (Conscientiousness, Higher, Individual, QuickWin, "Choose one task this week to finish at good-enough rather than perfect."),
        (Conscientiousness, Higher, Individual, Habit, "Hand off one detailed task and agree only on the outcome, not the steps."),
        (Conscientiousness, Lower, Team, QuickWin, "Make deadlines visible on a shared board everyone checks daily."),
        (Conscientiousness, Lower, Team, Habit, "End each meeting by naming who does what by when."),
        (Conscientiousness, Balanced, Team, QuickWin, "Agree on a light weekly planning ritual that fits the team."),
        (Conscientiousness, Higher, Team, QuickWin, "Time-box planning sessions so preparation does not replace doing."),
        (Conscientiousness, Higher, Team, Habit, "Celebrate fast experiments as well as flawless delivery."),

        // Extraversion
        (Extraversion, Lower, Individual, QuickWin, "Share one idea in writing before your next meeting."),
        (Extraversion, Lower, Individual, Habit, "Protect two blocks of focus time each week and tell your team when they are."),
        (Extraversion, Balanced, Individual, QuickWin, "Notice which meetings energize you and which drain you this week."),
        (Extraversion, Balanced, Individual, Habit, "Alternate collaborative days with quieter focus days when you can."),
        (Extraversion, Higher, Individual, QuickWin, "In your next meeting, ask a quieter colleague for their view first."),
        (Extraversion, Higher, Individual, Habit, "Pause for a few seconds before answering to leave room for others."),
        (Extraversion, Lower, Team, QuickWin, "Collect agenda input in writing so everyone can contribute."),
        (Extraversion, Lower, Team, Habit, "Schedule informal check-ins so connection does not depend on chance."),
        (Extraversion, Balanced, Team, QuickWin, "Mix live discussion with written follow-up for key decisions."),
        (Extraversion, Higher, Team, QuickWin, "Use round-robin turns in meetings so every voice is heard."),
        (Extraversion, Higher, Team, Habit, "Keep some meeting-free time each week for deep work."),

        // Agreeableness
        (Agreeableness, Lower, Individual, QuickWin, "Open your next piece of feedback by naming something that works."),
        (Agreeableness, Lower, Individual, Habit, "Ask one clarifying question before challenging an idea."),
        (Agreeableness, Balanced, Individual, QuickWin, "Pick one hard conversation you have delayed and schedule it."),
        (Agreeableness, Balanced, Individual, Habit, "State your view plainly, then ask what you might be missing."),
        (Agreeableness, Higher, Individual, QuickWin, "Say no to one request this week that does not fit your priorities."),
        (Agreeableness, Higher, Individual, Habit, "Share disagreement early, while it is still easy to change course."),
        (Agreeableness, Lower, Team, QuickWin, "Agree on ground rules for debate before the next big decision."),
        (Agreeableness, Lower, Team, Habit, "Start retros with appreciation before moving to what went wrong."),
        (Agreeableness, Balanced, Team, QuickWin, "Make space for dissent by asking who sees it differently."),
        (Agreeableness, Higher, Team, QuickWin, "Assign a rotating devil's advocate for important decisions."),
        (Agreeableness, Higher, Team, Habit, "Track unresolved disagreements so they do not quietly disappear."),

        // Neuroticism
        (Neuroticism, Lower, Individual, QuickWin, "Ask a teammate which risks worry them most on your current project."),
        (Neuroticism, Lower, Individual, Habit, "Write down a plan B for your riskiest commitment."),
        (Neuroticism, Balanced, Individual, QuickWin, "Notice what raised your stress this week and note one thing that helped."),
        (Neuroticism, Balanced, Individual, Habit, "Build short recovery breaks into long, intense stretches of work."),
        (Neuroticism, Higher, Individual, QuickWin, "Write down your top worry and one small step that reduces it."),
        (Neuroticism, Higher, Individual, Habit, "End each day by noting one thing that went well."),
        (Neuroticism, Lower, Team, QuickWin, "Add a short risk review to the next planning session."),
        (Neuroticism, Lower, Team, Habit, "Check in on workload during busy periods, even when things look calm."),
        (Neuroticism, Balanced, Team, QuickWin, "Agree how the team signals when pressure is getting too high."),
        (Neuroticism, Higher, Team, QuickWin, "Share clear priorities so uncertainty does not spread."),
        (Neuroticism, Higher, Team, Habit, "Keep a regular, predictable rhythm of updates during change."),

        // Power distance
        (PowerDistance, Lower, Individual, QuickWin, "Clarify who makes the final call on your current project."),
        (PowerDistance, Lower, Individual, Habit, "Write down decisions and owners so open debate still ends in action."),
        (PowerDistance, Balanced, Individual, QuickWin, "Ask your lead which decisions you can make on your own."),
        (PowerDistance, Higher, Individual, QuickWin, "Share one suggestion directly with a senior colleague this week."),
        (PowerDistance, Higher, Individual, Habit, "Ask for the reasoning behind decisions, not only the outcome."),
        (PowerDistance, Lower, Team, QuickWin, "Publish a simple decision log with an owner for each decision."),
        (PowerDistance, Balanced, Team, QuickWin, "Make clear which decisions are consultative and which are delegated."),
        (PowerDistance, Higher, Team, QuickWin, "Run an anonymous idea round before leaders share their view."),
        (PowerDistance, Higher, Team, Habit, "Rotate who chairs team meetings."),

        // Individualism
        (Individualism, Lower, Individual, QuickWin, "Name one personal contribution in your next update."),
        (Individualism, Lower, Individual, Habit, "Set one personal goal alongside your team goals."),
        (Individualism, Balanced, Individual, QuickWin, "Check that your personal priorities still line up with the team's."),
        (Individualism, Higher, Individual, QuickWin, "Share progress on your work where the team can see it."),
        (Individualism, Higher, Individual, Habit, "Offer help on a teammate's task once a week."),
        (Individualism, Lower, Team, QuickWin, "Recognize individual contributions as well as team wins."),
        (Individualism, Balanced, Team, QuickWin, "Make both team goals and personal goals visible."),
        (Individualism, Higher, Team, QuickWin, "Set one shared goal that needs everyone to succeed."),
        (Individualism, Higher, Team, Habit, "Hold short demos so people see each other's work."),

        // Masculinity (achievement orientation)
        (Masculinity, Lower, Individual, QuickWin, "Set one stretch goal for the month and track it."),
        (Masculinity, Lower, Individual, Habit, "Celebrate your own wins, however small."),
        (Masculinity, Balanced, Individual, QuickWin, "Check that this week's targets leave room for rest."),
        (Masculinity, Higher, Individual, QuickWin, "Block one evening this week that stays free of work."),
        (Masculinity, Higher, Individual, Habit, "Measure success by learning as well as by results."),
        (Masculinity, Lower, Team, QuickWin, "Agree on one measurable goal for the quarter."),
        (Masculinity, Balanced, Team, QuickWin, "Review targets and wellbeing side by side in retros."),
        (Masculinity, Higher, Team, QuickWin, "Watch workload during pushes and pause when people are stretched."),
        (Masculinity, Higher, Team, Habit, "Recognize collaboration, not only individual wins."),

        // Uncertainty avoidance
        (UncertaintyAvoidance, Lower, Individual, QuickWin, "List the top two risks before starting your next task."),
        (UncertaintyAvoidance, Lower, Individual, Habit, "Write a short checklist for work you repeat often."),
        (UncertaintyAvoidance, Balanced, Individual, QuickWin, "Decide how much certainty you need before acting on your next decision."),
        (UncertaintyAvoidance, Higher, Individual, QuickWin, "Take one decision this week with the information you already have."),
        (UncertaintyAvoidance, Higher, Individual, Habit, "Frame changes as small experiments you can undo."),
        (UncertaintyAvoidance, Lower, Team, QuickWin, "Add a short pre-mortem to the next project kickoff."),
        (UncertaintyAvoidance, Balanced, Team, QuickWin, "Agree which decisions need a plan and which can be tried."),
        (UncertaintyAvoidance, Higher, Team, QuickWin, "Run a small, reversible pilot before the next big change."),
        (UncertaintyAvoidance, Higher, Team, Habit, "Explain the why behind changes early and often."),

        // Long-term orientation
        (LongTermOrientation, Lower, Individual, QuickWin, "Spend one hour this week on a skill that pays off next year."),
        (LongTermOrientation, Lower, Individual, Habit, "Link each week's work to a longer-term goal."),
        (LongTermOrientation, Balanced, Individual, QuickWin, "Pick one quick win and one long-term goal for this month."),
        (LongTermOrientation, Higher, Individual, QuickWin, "Finish one small task today that shows visible progress."),
        (LongTermOrientation, Higher, Individual, Habit, "Break long goals into monthly milestones."),
        (LongTermOrientation, Lower, Team, QuickWin, "Reserve some capacity each sprint for long-term improvements."),
        (LongTermOrientation, Balanced, Team, QuickWin, "Keep a visible roadmap that shows both near and far goals."),
        (LongTermOrientation, Higher, Team, QuickWin, "Celebrate short-term wins along the way."),
        (LongTermOrientation, Higher, Team, Habit, "Revisit long plans quarterly against current needs."),

        // Indulgence
        (Indulgence, Lower, Individual, QuickWin, "Mark the end of a big task with a small celebration."),
        (Indulgence, Lower, Individual, Habit, "Schedule a regular break you actually enjoy."),
        (Indulgence, Balanced, Individual, QuickWin, "Notice what gives you energy at work and plan more of it."),
        (Indulgence, Higher, Individual, QuickWin, "Set one focused block each day with no distractions."),
        (Indulgence, Higher, Individual, Habit, "Finish the hardest task before the fun ones."),
        (Indulgence, Lower, Team, QuickWin, "Start meetings with a quick personal check-in."),
        (Indulgence, Balanced, Team, QuickWin, "Make sure social time includes everyone."),
        (Indulgence, Higher, Team, QuickWin, "Keep focus blocks protected from social interruptions."),
        (Indulgence, Higher, Team, Habit, "Pair celebrations with clear next steps."),

        // Innovation
        (Innovation, Lower, Individual, QuickWin, "Try one new tool or technique on a low-risk task."),
        (Innovation, Lower, Individual, Habit, "Keep a list of improvement ideas and review it monthly."),
        (Innovation, Balanced, Individual, QuickWin, "Choose where a new approach would pay off most and start there."),
        (Innovation, Higher, Individual, QuickWin, "Limit yourself to one active experiment at a time."),
        (Innovation, Higher, Individual, Habit, "Write a one-line success check before starting an experiment."),
        (Innovation, Lower, Team, QuickWin, "Reserve time each month for a small team experiment."),
        (Innovation, Balanced, Team, QuickWin, "Agree on simple criteria for which ideas get tried."),
        (Innovation, Higher, Team, QuickWin, "Cap the number of initiatives in progress at once."),
        (Innovation, Higher, Team, Habit, "Review experiments and stop the ones that are not working."),

        // Collaboration
        (Collaboration, Lower, Individual, QuickWin, "Share a short written update on your work with the team."),
        (Collaboration, Lower, Individual, Habit, "Document hand-offs so others can pick up your work."),
        (Collaboration, Balanced, Individual, QuickWin, "Pick one task this week that would go faster with a partner."),
        (Collaboration, Higher, Individual, QuickWin, "Decline one meeting where your input is not needed."),
        (Collaboration, Higher, Individual, Habit, "Make some decisions on your own and share them after."),
        (Collaboration, Lower, Team, QuickWin, "Hold a short weekly sync to share what everyone is working on."),
        (Collaboration, Balanced, Team, QuickWin, "Agree when to work together and when to work alone."),
        (Collaboration, Higher, Team, QuickWin, "Audit recurring meetings and drop the least useful one."),
        (Collaboration, Higher, Team, Habit, "Name a single decision owner for each piece of work."),

        // Autonomy
        (Autonomy, Lower, Individual, QuickWin, "Make one small decision this week without asking first."),
        (Autonomy, Lower, Individual, Habit, "Propose a solution whenever you raise a problem."),
        (Autonomy, Balanced, Individual, QuickWin, "Clarify with your lead where you own decisions outright."),
        (Autonomy, Higher, Individual, QuickWin, "Send a short progress update before anyone asks."),
        (Autonomy, Higher, Individual, Habit, "Check your direction with stakeholders at key milestones."),
        (Autonomy, Lower, Team, QuickWin, "Spell out which decisions people can make on their own."),
        (Autonomy, Balanced, Team, QuickWin, "Agree on boundaries for independent decisions."),
        (Autonomy, Higher, Team, QuickWin, "Set a regular rhythm of short written updates."),
        (Autonomy, Higher, Team, Habit, "Revisit shared goals monthly so independent work stays aligned."),

        // Quality
        (Quality, Lower, Individual, QuickWin, "Add one quick self-check before handing off your next piece of work."),
        (Quality, Lower, Individual, Habit, "Keep a short list of mistakes you want to avoid repeating."),
        (Quality, Balanced, Individual, QuickWin, "Decide up front how polished your current task needs to be."),
        (Quality, Higher, Individual, QuickWin, "Ship one piece of work at good-enough and gather feedback."),
        (Quality, Higher, Individual, Habit, "Set a time limit on reviews and polishing."),
        (Quality, Lower, Team, QuickWin, "Agree on a simple definition of done."),
        (Quality, Balanced, Team, QuickWin, "Align on quality expectations for each type of work."),
        (Quality, Higher, Team, QuickWin, "Spread reviews across the team so no one becomes a bottleneck."),
        (Quality, Higher, Team, Habit, "Separate must-fix issues from nice-to-haves in reviews."),

        // Customer focus
        (CustomerFocus, Lower, Individual, QuickWin, "Read three recent customer comments about your area."),
        (CustomerFocus, Lower, Individual, Habit, "Ask how each task helps a customer before starting it."),
        (CustomerFocus, Balanced, Individual, QuickWin, "Talk to one customer or customer-facing colleague this month."),
        (CustomerFocus, Higher, Individual, QuickWin, "Check capacity before promising a customer a date."),
        (CustomerFocus, Higher, Individual, Habit, "Reserve time for internal improvements that customers never see."),
        (CustomerFocus, Lower, Team, QuickWin, "Share one piece of customer feedback at each team meeting."),
        (CustomerFocus, Balanced, Team, QuickWin, "Set a regular rhythm for gathering customer input."),
        (CustomerFocus, Higher, Team, QuickWin, "Agree who can commit to customer deadlines."),
        (CustomerFocus, Higher, Team, Habit, "Protect a share of each cycle for internal work."),
    ];

    ROWS
}
