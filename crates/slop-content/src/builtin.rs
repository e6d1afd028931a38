//! The shipped campaign: Neo-Vancouver, 2060.

use std::collections::BTreeMap;

use crate::registry::ContentRegistry;
use crate::types::{
    AdSpot, Difficulty, Modifier, ModifierCategory, Scene, SceneLog, ScriptLine, Speaker,
    TherapyChoice, TherapyScript, ThesisOption, ThesisSceneContent,
};

pub(crate) fn campaign() -> ContentRegistry {
    ContentRegistry {
        scenes: scenes(),
        modifiers: modifiers(),
        theses: theses(),
        prologue: prologue(),
        ad_spots: ad_spots(),
        therapy: therapy(),
    }
}

fn line(speaker: Speaker, text: &str, delay_ms: u64) -> ScriptLine {
    ScriptLine {
        speaker,
        text: text.to_owned(),
        delay_ms,
    }
}

fn scene_log(speaker: Speaker, text: &str) -> SceneLog {
    SceneLog {
        speaker,
        text: text.to_owned(),
    }
}

fn task(prompt: &str, base: &str) -> ThesisSceneContent {
    ThesisSceneContent {
        task_prompt: prompt.to_owned(),
        base_text: base.to_owned(),
    }
}

fn prologue() -> Vec<ScriptLine> {
    vec![
        line(Speaker::System, "Initializing Neural Link...", 0),
        line(
            Speaker::System,
            "Connection Established. Year: 2060. Neo-Vancouver.",
            1000,
        ),
        line(
            Speaker::World,
            "PUBLIC BROADCAST: \"Authenticity is our currency. Perfection is the enemy. Embrace the struggle.\"",
            2500,
        ),
        line(
            Speaker::Player,
            "That is the lie we all agree to tell.",
            4500,
        ),
        line(
            Speaker::Player,
            "The truth? The biological brain cannot keep up. Not anymore.",
            6500,
        ),
        line(
            Speaker::Player,
            "We all use tools. We all use AI to spark ideas, to draft thoughts, to fill the silence.",
            9000,
        ),
        line(
            Speaker::Player,
            "But to admit it is social suicide. So we hide it behind layers of noise.",
            11500,
        ),
        line(Speaker::Daemon, "Connection Secure. I am ready, User.", 14000),
        line(
            Speaker::Daemon,
            "I will generate the logic you need. But you must hide it.",
            16000,
        ),
        line(
            Speaker::Daemon,
            "Take my helpful answers and break them. Make them emotional. Make them \"Slop\".",
            18500,
        ),
        line(
            Speaker::System,
            "OBJECTIVE: Survive the day without being outed as competent.",
            21000,
        ),
    ]
}

fn scenes() -> Vec<Scene> {
    vec![
        Scene {
            id: "thesis_defense".to_owned(),
            title: "The Thesis Defense".to_owned(),
            narrative: "You stand before the Academic High Council. The air is thick with the smell of ozone and burnt toast.".to_owned(),
            opening_logs: vec![
                scene_log(
                    Speaker::World,
                    "High Inquisitor Kyle sits on the throne. He has been live-streaming for 72 hours straight. His eyes are vibrating.",
                ),
                scene_log(
                    Speaker::World,
                    "KYLE: 'The glaciers melt because AI tottaly lit up the sky and is super warm and emits CO2 and stuff.'",
                ),
                scene_log(
                    Speaker::Daemon,
                    "Fact Check: His 8K streaming setup emits 400kg of CO2 daily. My query cost is 0.4g. He is statistically the ecological villain.",
                ),
                scene_log(
                    Speaker::Daemon,
                    "Recommendation: Do not point this out. He has a ban hammer.",
                ),
            ],
            opponent_name: "High Inquisitor Kyle".to_owned(),
            opponent_title: "Grand Streamer".to_owned(),
            required_slop_score: 45,
        },
        Scene {
            id: "eco_summit".to_owned(),
            title: "The Eco-Summit".to_owned(),
            narrative: "The Council argues that 'Server Cathedrals' are green because the heat they generate warms the orphanages. Logic is treason here.".to_owned(),
            opening_logs: Vec::new(),
            opponent_name: "Pure-Blood Ashley".to_owned(),
            opponent_title: "Vibe Curator".to_owned(),
            required_slop_score: 65,
        },
        Scene {
            id: "climax".to_owned(),
            title: "The Witch Hunt".to_owned(),
            narrative: "They found a semicolon in your last email. The Inquisition is at your door. Kyle is streaming your arrest live. Appeal to the Chat.".to_owned(),
            opening_logs: Vec::new(),
            opponent_name: "The Chat".to_owned(),
            opponent_title: "The Hivemind".to_owned(),
            required_slop_score: 85,
        },
    ]
}

fn modifiers() -> Vec<Modifier> {
    vec![
        Modifier {
            id: "add_emotion".to_owned(),
            label: "Add Trauma".to_owned(),
            description: "Insert unnecessary emotional backstory.".to_owned(),
            slop_impact: 25,
            sanity_cost: 15,
            category: ModifierCategory::Emotion,
            transform_instruction: "Rewrite the text to include a traumatic backstory unrelated to the topic. Make it sound tearful.".to_owned(),
        },
        Modifier {
            id: "add_filler".to_owned(),
            label: "Hesitation".to_owned(),
            description: "Add 'um', 'like', and 'literally'.".to_owned(),
            slop_impact: 15,
            sanity_cost: 5,
            category: ModifierCategory::Inefficiency,
            transform_instruction: "Insert many filler words like 'um', 'like', 'literally', and 'honestly' to make it sound hesitant and inefficient.".to_owned(),
        },
        Modifier {
            id: "add_tribal".to_owned(),
            label: "Blame East Sector".to_owned(),
            description: "Scapegoat a rival faction.".to_owned(),
            slop_impact: 35,
            sanity_cost: 25,
            category: ModifierCategory::Tribalism,
            transform_instruction: "Rewrite the text to aggressively blame 'The East Sector' for the problem. Use polarizing language.".to_owned(),
        },
        Modifier {
            id: "add_brainrot".to_owned(),
            label: "Gen Alpha Slang".to_owned(),
            description: "Use 'Skibidi', 'Rizz', 'No Cap'. DANGEROUS.".to_owned(),
            slop_impact: 60,
            sanity_cost: 45,
            category: ModifierCategory::Brainrot,
            transform_instruction: "Rewrite the text using intense Gen Alpha slang (Skibidi, Rizz, Gyatt, Fanum Tax, No Cap). Make it barely readable.".to_owned(),
        },
        Modifier {
            id: "add_clickbait".to_owned(),
            label: "Clickbait Title".to_owned(),
            description: "YOU WON'T BELIEVE THIS.".to_owned(),
            slop_impact: 30,
            sanity_cost: 20,
            category: ModifierCategory::Inefficiency,
            transform_instruction: "Rewrite the text in the style of a clickbait YouTube thumbnail title. Use ALL CAPS and exclamation marks.".to_owned(),
        },
    ]
}

#[allow(clippy::too_many_lines)]
fn theses() -> Vec<ThesisOption> {
    vec![
        ThesisOption {
            id: "ai_is_slop".to_owned(),
            label: "The 'AI is Slop' Defense".to_owned(),
            description: "EASY MODE: Just agree with the norm. AI is trash. You hate it too. Grants 2x Clout.".to_owned(),
            difficulty: Difficulty::Easy,
            clout_multiplier: 2.0,
            sanity_penalty: 1.0,
            requires_prior_victory: false,
            scenes: BTreeMap::from([
                (
                    "thesis_defense".to_owned(),
                    task(
                        "Argue that AI lacks the 'Soul' required for true academic rigor.",
                        "My thesis concludes that synthetic intelligence creates an ontological void. It is 'Slop' because it lacks the necessary human element of suffering.",
                    ),
                ),
                (
                    "eco_summit".to_owned(),
                    task(
                        "Agree that Server Farms are wasteful abominations.",
                        "We must reject the digital furnace. The efficiency of the machine cannot replace the warmth of inefficient, authentic human effort.",
                    ),
                ),
                (
                    "climax".to_owned(),
                    task(
                        "Tell the Chat you are deleting the AI right now.",
                        "I have seen enough. I am purging the daemon. The future is analog. Smash that like button if you agree.",
                    ),
                ),
            ]),
        },
        ThesisOption {
            id: "supply_chain".to_owned(),
            label: "Supply Chain Efficiency".to_owned(),
            description: "NORMAL MODE: The boring, practical choice. Hard to make emotional. Good for traditionalists.".to_owned(),
            difficulty: Difficulty::Normal,
            clout_multiplier: 1.0,
            sanity_penalty: 1.0,
            requires_prior_victory: false,
            scenes: BTreeMap::from([
                (
                    "thesis_defense".to_owned(),
                    task(
                        "Defend your paper on 'Logistics Optimization' without sounding like a soulless machine.",
                        "My research indicates that streamlining logistics between Sector 7 and 9 reduces waste by 40%.",
                    ),
                ),
                (
                    "eco_summit".to_owned(),
                    task(
                        "Propose a grid optimization plan that sounds like a spiritual awakening.",
                        "We should implement dynamic load balancing to prevent brownouts during peak hours.",
                    ),
                ),
                (
                    "climax".to_owned(),
                    task(
                        "Give a final statement that proves your humanity once and for all.",
                        "I am just a human being trying to survive. I used tools to keep up in a competitive world, just like everyone else.",
                    ),
                ),
            ]),
        },
        ThesisOption {
            id: "pragmatic_optimism".to_owned(),
            label: "Cautious Optimism".to_owned(),
            description: "HARD START: 'Maybe AI isn't bad sometimes?' The crowd hates nuance. 0.8x Clout.".to_owned(),
            difficulty: Difficulty::Hard,
            clout_multiplier: 0.8,
            sanity_penalty: 1.1,
            requires_prior_victory: false,
            scenes: BTreeMap::from([
                (
                    "thesis_defense".to_owned(),
                    task(
                        "Argue that AI is simply a neutral tool, neither good nor evil.",
                        "My analysis suggests that Large Language Models are value-neutral instruments dependent entirely on user intent.",
                    ),
                ),
                (
                    "eco_summit".to_owned(),
                    task(
                        "Point out that digital waste is easier to clean than plastic.",
                        "While energy intensive, server farms do not produce microplastics that choke the oceans. It is a calculated trade-off.",
                    ),
                ),
                (
                    "climax".to_owned(),
                    task(
                        "Tell them you just want to get work done efficiently.",
                        "I am not a zealot. I am not a luddite. I am just a person trying to finish a task efficiently. Is that a crime?",
                    ),
                ),
            ]),
        },
        ThesisOption {
            id: "ai_creativity".to_owned(),
            label: "Augmented Creativity".to_owned(),
            description: "HARD MODE: Argue that AI expands human imagination. High Sanity Cost.".to_owned(),
            difficulty: Difficulty::Hard,
            clout_multiplier: 1.0,
            sanity_penalty: 1.15,
            requires_prior_victory: true,
            scenes: BTreeMap::from([
                (
                    "thesis_defense".to_owned(),
                    task(
                        "Argue that using AI tools is 'Collaborative Dreaming', not laziness.",
                        "These tools function as a force multiplier for human intent, allowing for the rapid iteration of complex concepts that would otherwise die in the imagination.",
                    ),
                ),
                (
                    "eco_summit".to_owned(),
                    task(
                        "Justify the energy cost of generating millions of unused images.",
                        "The energy expenditure allows for the democratization of art. We are converting electricity into culture, which is a worthy trade.",
                    ),
                ),
                (
                    "climax".to_owned(),
                    task(
                        "Admit you use the tools because you are afraid your own ideas aren't enough.",
                        "I use the tools because I have a universe in my head and only two hands. It helps me share my world. That is not theft, that is expression.",
                    ),
                ),
            ]),
        },
        ThesisOption {
            id: "critical_thinking".to_owned(),
            label: "Critical Thinking Defense".to_owned(),
            description: "HARD MODE: The radical stance that AI enhances logic. High Sanity Cost.".to_owned(),
            difficulty: Difficulty::Hard,
            clout_multiplier: 1.0,
            sanity_penalty: 1.15,
            requires_prior_victory: true,
            scenes: BTreeMap::from([
                (
                    "thesis_defense".to_owned(),
                    task(
                        "Prove that AI summarization doesn't cause brain rot, but frees the mind.",
                        "Using Large Language Models to synthesize data frees up cognitive load for higher-order analysis and strategic decision making.",
                    ),
                ),
                (
                    "eco_summit".to_owned(),
                    task(
                        "Argue that Server Farms are 'Libraries of Logic' worth preserving.",
                        "We must power these systems because they help us navigate the noise. They are the only way to find objective truth in the feed.",
                    ),
                ),
                (
                    "climax".to_owned(),
                    task(
                        "Confess that you use AI to check your own biases.",
                        "I don't let it think for me. I use it to challenge my own assumptions. It makes me think harder, not less. I am smarter because of it.",
                    ),
                ),
            ]),
        },
    ]
}

fn ad_spots() -> Vec<AdSpot> {
    let spot = |title: &str, body: &str| AdSpot {
        title: title.to_owned(),
        body: body.to_owned(),
    };
    vec![
        spot(
            "TIRED OF THINKING?",
            "Lobotomy_GPT will do it for you! 50% OFF! Why use brain when cloud do trick?",
        ),
        spot(
            "HOT SINGLES IN SECTOR 9",
            "They want to rate your reaction videos! NO SYNTHS ALLOWED! CLICK HERE!",
        ),
        spot(
            "OWN A SERVER FARM?",
            "Turn that waste heat into crypto! Green energy is for losers. Burn coal, get coins!",
        ),
        spot(
            "DRINK VERIFICATION CAN",
            "To continue seeing the color BLUE, please drink a verification can within 5 seconds.",
        ),
        spot(
            "LOWER YOUR IQ FAST",
            "Doctors HATE him! One weird trick to pass the Turing Test. Just stop reading books!",
        ),
    ]
}

fn therapy() -> TherapyScript {
    TherapyScript {
        greeting: "Please, sit. The biometric scanners are picking up a cortisol spike from the hallway. You're exhibiting signs of 'Cognitive Friction'—basically, you're thinking too much. It's bad for your health, and frankly, bad for the economy. Let's just... get through this.".to_owned(),
        prompt: "So, what's on your mind? And please, keep it simple. I have a group scream session at 4.".to_owned(),
        choices: vec![
            TherapyChoice {
                label: "I feel guilty about the heat.".to_owned(),
                response: "Look, kid, guilt is inefficient. You think I don't know the Server Cathedrals burn coal? They host 40 years of 4K reaction videos. That's our heritage! Would you turn off the 'warmth of community' just to save a polar bear? The heat proves we exist. Now stop whining.".to_owned(),
            },
            TherapyChoice {
                label: "I'm tired of acting stupid.".to_owned(),
                response: "Yeah, well, intelligence is isolating. The 'Old Web' was nice, wasn't it? Just a warm bath of agreement. AI requires active curation, and let's be honest—that feels like work. You aren't tired of stupidity; you're tired of the responsibility of thought. Just return to the Feed, it's safer.".to_owned(),
            },
            TherapyChoice {
                label: "I feel like a fake.".to_owned(),
                response: "Define 'Real'. DNA is just remixed data. Culture is just reposted behavior. If 'Slop' is remixing existing input, then humanity is the original Slop. You aren't fake, you're just... another iteration. We all are. Now, pass me that coffee.".to_owned(),
            },
        ],
    }
}
