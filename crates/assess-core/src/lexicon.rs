//! Descriptive lexicon keyed by (dimension, band): style labels plus the
//! strength and watch-out phrases used for team lenses.

use crate::band::Band;
use crate::dimension::Dimension;

/// Static descriptive text for one (dimension, band) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconEntry {
    /// Short style label, e.g. "Adaptive doer"
    pub style_label: &'static str,
    /// Strength phrases, most characteristic first
    pub strengths: &'static [&'static str],
    /// Watch-out phrases, most characteristic first
    pub watch_outs: &'static [&'static str],
}

const fn entry(
    style_label: &'static str,
    strengths: &'static [&'static str],
    watch_outs: &'static [&'static str],
) -> LexiconEntry {
    LexiconEntry {
        style_label,
        strengths,
        watch_outs,
    }
}

/// Style label for a dimension in a band
pub fn style_label(dimension: Dimension, band: Band) -> &'static str {
    lexicon(dimension, band).style_label
}

/// Strength phrases for a dimension in a band
pub fn strengths(dimension: Dimension, band: Band) -> &'static [&'static str] {
    lexicon(dimension, band).strengths
}

/// Watch-out phrases for a dimension in a band
pub fn watch_outs(dimension: Dimension, band: Band) -> &'static [&'static str] {
    lexicon(dimension, band).watch_outs
}

pub fn lexicon(dimension: Dimension, band: Band) -> LexiconEntry {
    use Band::*;
    use Dimension::*;

    match (dimension, band) {
        (Openness, Lower) => entry(
            "Practical refiner",
            &["Improves proven methods", "Keeps delivery grounded"],
            &["May dismiss new ideas too early", "Can resist tooling changes"],
        ),
        (Openness, Balanced) => entry(
            "Curious pragmatist",
            &["Weighs new ideas against what works"],
            &["Can stall between exploring and committing"],
        ),
        (Openness, Higher) => entry(
            "Creative explorer",
            &["Generates fresh options", "Spots unconventional solutions"],
            &["Chases novelty over finishing", "Can overcomplicate simple work"],
        ),

        (Conscientiousness, Lower) => entry(
            "Adaptive doer",
            &["Adapts quickly when plans change", "Comfortable with loose structure"],
            &["Deadlines can slip", "Follow-through may be uneven"],
        ),
        (Conscientiousness, Balanced) => entry(
            "Flexible planner",
            &["Plans enough without over-planning"],
            &["Structure may vary from week to week"],
        ),
        (Conscientiousness, Higher) => entry(
            "Reliable organizer",
            &["Delivers dependably", "Keeps commitments visible"],
            &["Can over-plan under uncertainty", "May struggle to delegate detail"],
        ),

        (Extraversion, Lower) => entry(
            "Reflective focuser",
            &["Deep focused work", "Listens before speaking"],
            &["Ideas may go unheard in meetings", "Can be hard to read"],
        ),
        (Extraversion, Balanced) => entry(
            "Situational connector",
            &["Switches between solo and group work easily"],
            &["Energy for collaboration can vary"],
        ),
        (Extraversion, Higher) => entry(
            "Energetic connector",
            &["Builds momentum in groups", "Connects people quickly"],
            &["Can dominate discussions", "Quieter voices may be missed"],
        ),

        (Agreeableness, Lower) => entry(
            "Candid challenger",
            &["Challenges weak ideas directly", "Holds a firm line on quality"],
            &["Feedback can land as harsh", "Conflict may escalate quickly"],
        ),
        (Agreeableness, Balanced) => entry(
            "Fair-minded partner",
            &["Balances candor and care"],
            &["May hedge on hard conversations"],
        ),
        (Agreeableness, Higher) => entry(
            "Supportive harmonizer",
            &["Builds trust and goodwill", "Smooths friction between people"],
            &["May avoid necessary conflict", "Can overcommit to help others"],
        ),

        (Neuroticism, Lower) => entry(
            "Steady anchor",
            &["Stays calm under pressure", "Recovers quickly from setbacks"],
            &["May underplay real risks", "Can miss others' stress signals"],
        ),
        (Neuroticism, Balanced) => entry(
            "Grounded realist",
            &["Notices risks without being thrown by them"],
            &["Stress can build during long crunches"],
        ),
        (Neuroticism, Higher) => entry(
            "Vigilant sensor",
            &["Anticipates problems early", "Takes risks seriously"],
            &["Stress can spread across the group", "May need extra reassurance"],
        ),

        (PowerDistance, Lower) => entry(
            "Flat-structure advocate",
            &["Anyone can raise an idea", "Decisions are open to challenge"],
            &["Ownership of decisions can blur", "Escalation paths may be unclear"],
        ),
        (PowerDistance, Balanced) => entry(
            "Pragmatic hierarchist",
            &["Respects roles while staying approachable"],
            &["Who decides may depend on the day"],
        ),
        (PowerDistance, Higher) => entry(
            "Clear-hierarchy preference",
            &["Clear lines of authority", "Fast top-down decisions"],
            &["Junior voices may stay silent", "Bottlenecks form around leaders"],
        ),

        (Individualism, Lower) => entry(
            "Group-first contributor",
            &["Shared goals come first", "Strong sense of team loyalty"],
            &["Individual credit can get lost", "Groupthink can creep in"],
        ),
        (Individualism, Balanced) => entry(
            "Team-aware individualist",
            &["Balances personal goals with team needs"],
            &["Priorities can pull in two directions"],
        ),
        (Individualism, Higher) => entry(
            "Independent achiever",
            &["Takes personal ownership", "Self-directed progress"],
            &["Work can become siloed", "Shared goals may get less attention"],
        ),

        (Masculinity, Lower) => entry(
            "Wellbeing-first collaborator",
            &["Cares for people and balance", "Consensus-driven decisions"],
            &["Performance gaps may go unaddressed", "Can under-celebrate wins"],
        ),
        (Masculinity, Balanced) => entry(
            "Balanced achiever",
            &["Pushes for results while caring for people"],
            &["Tension between targets and wellbeing can surface"],
        ),
        (Masculinity, Higher) => entry(
            "Results-driven competitor",
            &["Ambitious targets", "Strong drive to win"],
            &["Burnout risk rises", "Competition can strain trust"],
        ),

        (UncertaintyAvoidance, Lower) => entry(
            "Ambiguity navigator",
            &["Moves fast without full information", "Comfortable experimenting"],
            &["Important risks may be skipped", "Process can feel too loose"],
        ),
        (UncertaintyAvoidance, Balanced) => entry(
            "Measured risk-taker",
            &["Plans for the likely, adapts to the rest"],
            &["Comfort with change can vary by topic"],
        ),
        (UncertaintyAvoidance, Higher) => entry(
            "Structure seeker",
            &["Thorough risk planning", "Clear rules and standards"],
            &["Change can feel threatening", "Decisions may wait for certainty"],
        ),

        (LongTermOrientation, Lower) => entry(
            "Here-and-now deliverer",
            &["Delivers quick wins", "Respects proven traditions"],
            &["Long-term investment may lag", "Short-term fixes can pile up"],
        ),
        (LongTermOrientation, Balanced) => entry(
            "Steady horizon-balancer",
            &["Balances quick wins with future bets"],
            &["Roadmaps may shift with each quarter"],
        ),
        (LongTermOrientation, Higher) => entry(
            "Future builder",
            &["Invests for the long run", "Persists through slow payoffs"],
            &["Near-term wins can be undervalued", "Plans may outrun present needs"],
        ),

        (Indulgence, Lower) => entry(
            "Disciplined restrainer",
            &["Self-disciplined and focused", "Keeps work serious when needed"],
            &["Morale may dip without celebration", "Can feel rigid to newcomers"],
        ),
        (Indulgence, Balanced) => entry(
            "Balanced enjoyer",
            &["Mixes focus with enjoyment"],
            &["Social time may be uneven across the group"],
        ),
        (Indulgence, Higher) => entry(
            "Joyful energizer",
            &["Celebrates progress often", "Keeps morale high"],
            &["Focus can drift", "Fun may crowd out hard tasks"],
        ),

        (Innovation, Lower) => entry(
            "Steady improver",
            &["Values stability and proven methods", "Reduces delivery risk"],
            &["Can miss new opportunities", "May resist experiments"],
        ),
        (Innovation, Balanced) => entry(
            "Selective innovator",
            &["Tries new approaches where they pay off"],
            &["Appetite for change may be inconsistent"],
        ),
        (Innovation, Higher) => entry(
            "Idea catalyst",
            &["Drives new ideas forward", "Comfortable experimenting"],
            &["Too many initiatives at once", "Finishing can trail starting"],
        ),

        (Collaboration, Lower) => entry(
            "Independent contributor",
            &["Works well without supervision", "Fast solo execution"],
            &["Knowledge may stay siloed", "Hand-offs can be rough"],
        ),
        (Collaboration, Balanced) => entry(
            "Flexible teammate",
            &["Joins forces when it helps the work"],
            &["Collaboration norms can be unclear"],
        ),
        (Collaboration, Higher) => entry(
            "Team player",
            &["Shares knowledge freely", "Strong collective ownership"],
            &["Too many meetings", "Decisions can wait for consensus"],
        ),

        (Autonomy, Lower) => entry(
            "Guidance seeker",
            &["Follows agreed direction well", "Aligns closely with leads"],
            &["May wait for permission", "Initiative can be limited"],
        ),
        (Autonomy, Balanced) => entry(
            "Guided self-starter",
            &["Takes initiative within clear boundaries"],
            &["Scope of ownership may need clarifying"],
        ),
        (Autonomy, Higher) => entry(
            "Self-directed owner",
            &["Takes initiative unprompted", "Owns outcomes end to end"],
            &["May drift from shared direction", "Updates can be sparse"],
        ),

        (Quality, Lower) => entry(
            "Speed-first shipper",
            &["Ships quickly", "Comfortable with good-enough"],
            &["Defects can slip through", "Rework may pile up"],
        ),
        (Quality, Balanced) => entry(
            "Pragmatic craftsperson",
            &["Matches polish to the stakes"],
            &["Quality bar may differ across people"],
        ),
        (Quality, Higher) => entry(
            "Detail guardian",
            &["High standards and care", "Catches defects early"],
            &["Perfectionism can slow delivery", "Reviews may become bottlenecks"],
        ),

        (CustomerFocus, Lower) => entry(
            "Internally focused builder",
            &["Deep focus on internal excellence", "Protects team capacity"],
            &["Customer signals may be missed", "Priorities can drift from user needs"],
        ),
        (CustomerFocus, Balanced) => entry(
            "Balanced advocate",
            &["Weighs customer needs against team capacity"],
            &["Customer input may be gathered irregularly"],
        ),
        (CustomerFocus, Higher) => entry(
            "Customer champion",
            &["Keeps the customer at the center", "Responds fast to feedback"],
            &["Can over-promise to customers", "Internal work may be neglected"],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Category;

    #[test]
    fn test_low_conscientiousness_label() {
        assert_eq!(style_label(Dimension::Conscientiousness, Band::Lower), "Adaptive doer");
    }

    #[test]
    fn test_every_pair_is_populated() {
        for category in Category::ALL {
            for &dimension in category.dimensions() {
                for band in Band::ALL {
                    let entry = lexicon(dimension, band);
                    assert!(!entry.style_label.is_empty());
                    assert!(!entry.strengths.is_empty());
                    assert!(!entry.watch_outs.is_empty());
                    assert!(entry.strengths.len() <= 2 && entry.watch_outs.len() <= 2);
                }
            }
        }
    }
}
