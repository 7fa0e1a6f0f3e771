//! Built-in course catalogue, inserted once into an empty database.

use rusqlite::{Connection, Result};

use super::chapters::{chapter_count, insert_chapter, insert_question};

struct SeedQuestion {
  text: &'static str,
  options: [&'static str; 4],
  correct: u32,
}

struct SeedChapter {
  title: &'static str,
  description: &'static str,
  video_url: &'static str,
  questions: [SeedQuestion; 5],
}

const fn q(text: &'static str, options: [&'static str; 4], correct: u32) -> SeedQuestion {
  SeedQuestion { text, options, correct }
}

const CATALOGUE: [SeedChapter; 3] = [
  SeedChapter {
    title: "Introduction to Flutter",
    description: "Learn the basics of Flutter framework and Dart programming language. Set up your development environment and create your first app.",
    video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
    questions: [
      q(
        "What programming language does Flutter use?",
        ["JavaScript", "Dart", "Python", "Swift"],
        1,
      ),
      q(
        "What is a Widget in Flutter?",
        ["A database connection", "A UI component", "A network request", "A testing tool"],
        1,
      ),
      q(
        "Which command creates a new Flutter project?",
        ["flutter new", "flutter create", "flutter init", "flutter start"],
        1,
      ),
      q(
        "What is hot reload in Flutter?",
        [
          "Restarting the app",
          "Instantly viewing code changes",
          "Clearing cache",
          "Building for production",
        ],
        1,
      ),
      q(
        "Flutter apps compile to what?",
        ["JavaScript only", "Native ARM code", "HTML/CSS", "Java bytecode"],
        1,
      ),
    ],
  },
  SeedChapter {
    title: "State Management",
    description: "Master state management in Flutter using Provider. Understand the difference between stateful and stateless widgets.",
    video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
    questions: [
      q(
        "What is state in Flutter?",
        [
          "App configuration",
          "Data that can change over time",
          "Static content",
          "User credentials",
        ],
        1,
      ),
      q(
        "What method rebuilds a StatefulWidget?",
        ["rebuild()", "refresh()", "setState()", "update()"],
        2,
      ),
      q(
        "What is Provider in Flutter?",
        ["A database", "A state management solution", "A UI library", "A testing framework"],
        1,
      ),
      q(
        "When should you use StatelessWidget?",
        ["When UI changes frequently", "When UI never changes", "For forms", "For animations"],
        1,
      ),
      q(
        "What does ChangeNotifier do?",
        [
          "Sends notifications",
          "Notifies listeners of state changes",
          "Changes app theme",
          "Manages routes",
        ],
        1,
      ),
    ],
  },
  SeedChapter {
    title: "Building Beautiful UIs",
    description: "Create stunning user interfaces with Flutter widgets. Learn about layouts, styling, and responsive design.",
    video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/Sintel.mp4",
    questions: [
      q("Which widget arranges children vertically?", ["Row", "Column", "Stack", "Grid"], 1),
      q(
        "What does Expanded widget do?",
        ["Makes child invisible", "Fills available space", "Adds padding", "Creates animation"],
        1,
      ),
      q(
        "How do you add rounded corners to a Container?",
        ["Using Padding", "Using BorderRadius", "Using Margin", "Using Alignment"],
        1,
      ),
      q(
        "What is the purpose of Scaffold widget?",
        [
          "Database operations",
          "Provides basic app layout structure",
          "Network requests",
          "State management",
        ],
        1,
      ),
      q(
        "Which property sets a Container's background color?",
        ["backgroundColor", "fillColor", "color or decoration", "paint"],
        2,
      ),
    ],
  },
];

/// Insert the built-in catalogue if no chapter exists. Returns true if seeded.
pub fn seed_catalogue(conn: &Connection) -> Result<bool> {
  if chapter_count(conn)? > 0 {
    tracing::debug!("Catalogue already seeded");
    return Ok(false);
  }

  tracing::info!("Seeding catalogue with {} chapters", CATALOGUE.len());
  let tx = conn.unchecked_transaction()?;
  for (position, chapter) in CATALOGUE.iter().enumerate() {
    let chapter_id = insert_chapter(
      &tx,
      chapter.title,
      chapter.description,
      chapter.video_url,
      position as i64 + 1,
    )?;
    for (index, question) in chapter.questions.iter().enumerate() {
      let options: Vec<String> = question.options.iter().map(|o| o.to_string()).collect();
      insert_question(&tx, chapter_id, question.text, &options, question.correct, index as i64)?;
    }
  }
  tx.commit()?;
  Ok(true)
}
