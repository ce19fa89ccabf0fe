//! Response text for each intent, plus the greeting formatter and fallback.

use super::random::RandomSource;
use super::rules::Intent;
use super::ChatError;

/// Default greeting synonyms, one of which opens every greeting reply.
pub const GREETING_SYNONYMS: &[&str] = &["Hello", "Hi there", "Hey", "Greetings"];

const STUDY_GROUPS: &str = "📚 **Study Groups**\n\nYou can view and join existing study groups, or create your own! Study groups are organized by:\n• Subject (Math, Programming, Physics, etc.)\n• Year (First Year, Second Year, etc.)\n• Meeting schedule\n\nGo to the **Study Groups page** to browse all available groups and join one that fits your schedule!";

const TEACHER_AVAILABILITY: &str = "👨‍🏫 **Teacher Availability**\n\nCheck the **Teacher Availability page** to see:\n• Office hours for each teacher\n• Best times to consult\n• Contact methods (email/office)\n\nYou can also see which teachers are available right now!";

const TEACHER_SEATING: &str = "📍 **Teacher Seating**\n\nVisit the **Teacher Seating page** to find:\n• Teacher office locations\n• Department-wise seating arrangement\n• Floor and room numbers\n\nThis helps you quickly locate any teacher's office!";

const TEACHER_INFO: &str = "👨‍🏫 **Teacher Information**\n\nI can help you with:\n• **Teacher Availability** - Check office hours and consultation times\n• **Teacher Seating** - Find teacher office locations\n\nWhat specific information do you need?";

const CLUBS: &str = "🎭 **College Clubs**\n\nWe have many active clubs! Visit the **Clubs page** to discover:\n• Tech clubs (Coding, Robotics, AI)\n• Cultural clubs (Music, Dance, Drama)\n• Sports clubs\n• Social service clubs\n\nEach club page shows activities, meeting times, and how to join!";

const TRANSPORT: &str = "🚌 **Transport Information**\n\nCheck the **Transport page** for:\n• Bus schedules and timings\n• Route information\n• Pickup/drop points\n• Campus shuttle services\n\nYou'll find all transportation options to reach campus!";

const ALUMNI: &str = "🎓 **Alumni Connect**\n\nThe **Alumni Connect page** helps you:\n• Connect with graduates from your department\n• Find mentors in your field\n• Get career guidance\n• Network for internships and jobs\n\nGreat for building professional connections!";

const CONTACTS: &str = "📞 **Important Contacts**\n\nVisit the **Contacts page** for:\n• Department phone numbers\n• Administration emails\n• Student services contacts\n• Emergency contacts\n• Faculty contact information\n\nAll organized by department and category!";

const RESOURCES: &str = "📖 **Academic Resources**\n\nExplore:\n• **First Year** - Core subjects and foundation courses\n• **Second Year** - Advanced topics\n• **Specializations** - Branch-specific resources\n\nYou can also join **Study Groups** to share notes and resources!";

const FIRST_YEAR: &str = "🎒 **First Year Information**\n\nCheck the **First Year page** for:\n• Core subjects and syllabus\n• Important dates\n• Study materials\n• Tips for new students\n\nDon't forget to join first-year study groups!";

const SECOND_YEAR: &str = "📚 **Second Year Information**\n\nVisit the **Second Year page** for:\n• Advanced course materials\n• Branch-specific content\n• Project guidelines\n• Internship information";

const SPECIALIZATIONS: &str = "🎯 **Specializations**\n\nExplore the **Specializations page** to learn about:\n• Different engineering branches\n• Computer Science streams\n• Career paths\n• Department-specific resources\n\nChoose your path wisely!";

/// Greeting body; the chosen synonym and `"! "` go in front of it.
const GREETING_BODY: &str = "👋 I'm your college assistant.\n\nI can help you with:\n• 📚 Study groups\n• 👨‍🏫 Teacher information\n• 🎭 College clubs\n• 🚌 Transport schedules\n• 🎓 Alumni connections\n• 📞 Important contacts\n\nWhat would you like to know?";

const HELP: &str = "🤖 **I'm here to help!**\n\nI can assist you with:\n\n📚 **Academics**\n• Study groups and peer learning\n• Academic resources and materials\n\n👨‍🏫 **Teachers**\n• Teacher availability and schedules\n• Office locations\n\n🎯 **Campus Life**\n• College clubs and activities\n• Transport and commute info\n• Alumni networking\n• Important contacts\n\nJust ask me anything about these topics!";

const THANKS: &str =
    "You're welcome! 😊 Feel free to ask if you need anything else. I'm here to help!";

/// Reply used when no rule matches.
pub const FALLBACK: &str = "I'm here to help with college information! 🎓\n\nI can assist you with:\n• **Study Groups** - Find or create study groups\n• **Teachers** - Check availability and locations\n• **Clubs** - Discover and join clubs\n• **Transport** - Bus schedules and routes\n• **Alumni** - Connect with graduates\n• **Contacts** - Important phone numbers\n\nCould you please be more specific about what you'd like to know? Or try asking about any of the topics above!";

/// Fixed text for `intent`, or `None` for the greeting, which is assembled
/// per call.
pub fn static_text(intent: Intent) -> Option<&'static str> {
    let text = match intent {
        Intent::StudyGroups => STUDY_GROUPS,
        Intent::TeacherAvailability => TEACHER_AVAILABILITY,
        Intent::TeacherSeating => TEACHER_SEATING,
        Intent::TeacherInfo => TEACHER_INFO,
        Intent::Clubs => CLUBS,
        Intent::Transport => TRANSPORT,
        Intent::Alumni => ALUMNI,
        Intent::Contacts => CONTACTS,
        Intent::Resources => RESOURCES,
        Intent::FirstYear => FIRST_YEAR,
        Intent::SecondYear => SECOND_YEAR,
        Intent::Specializations => SPECIALIZATIONS,
        Intent::Help => HELP,
        Intent::Thanks => THANKS,
        Intent::Fallback => FALLBACK,
        Intent::Greeting => return None,
    };
    Some(text)
}

/// Greeting reply opened by `synonym`.
pub fn greeting(synonym: &str) -> String {
    format!("{synonym}! {GREETING_BODY}")
}

/// Produce the final reply text for `intent`.
///
/// # Errors
///
/// Returns [`ChatError::Internal`] if a greeting is requested with no
/// synonyms, or the random source picks an index outside the list.
pub fn render(
    intent: Intent,
    synonyms: &[String],
    random: &dyn RandomSource,
) -> Result<String, ChatError> {
    if let Some(text) = static_text(intent) {
        return Ok(text.to_owned());
    }

    if synonyms.is_empty() {
        return Err(ChatError::Internal("no greeting synonyms configured".to_owned()));
    }
    let index = random.pick(synonyms.len());
    let synonym = synonyms.get(index).ok_or_else(|| {
        ChatError::Internal(format!(
            "random source picked {index} of {} greeting synonyms",
            synonyms.len()
        ))
    })?;
    Ok(greeting(synonym))
}
