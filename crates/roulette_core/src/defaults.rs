/// Built-in prompts used when nothing has been persisted yet.
const DEFAULT_TOPICS: &[&str] = &[
    "Talk about your favourite food",
    "Share a childhood memory",
    "Describe your ideal day off",
    "If you could use magic, what would you do?",
    "What do you want most right now?",
    "Talk about someone you look up to",
    "Your favourite season and why",
    "If you could stop time, what would you do?",
    "Three good things that happened today",
    "If you could talk to animals, what would you ask?",
    "A film or series you love",
    "Talk about your dream for the future",
    "If you won the lottery, what would you do?",
    "Talk about music you like",
    "The happiest moment you can remember",
    "If you could become invisible, what would you do?",
    "A place you love",
    "Something you want to try next",
];

pub fn default_topics() -> Vec<String> {
    DEFAULT_TOPICS.iter().map(|t| (*t).to_string()).collect()
}
