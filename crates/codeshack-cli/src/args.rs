//! CLI argument definitions using clap
//!
//! - codeshack topics list            # Browse the catalog
//! - codeshack question create        # Author a question
//! - codeshack login                  # Sign in with email and password
//! - codeshack config init            # Create a config file

use clap::{Args, Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codeshack")]
#[command(about = "CodeShack - browse and write interview questions by course, topic and company")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (json, toml or yaml)
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Base URL of the CodeShack API
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Use this identity token instead of stored credentials
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Command-line values that override configuration files and environment
    pub fn config_overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        if let Some(api_url) = &self.api_url {
            overrides.insert("api_url".to_string(), api_url.clone());
        }
        if let Some(token) = &self.token {
            overrides.insert("id_token".to_string(), token.clone());
        }
        if self.verbose {
            overrides.insert("log_level".to_string(), "debug".to_string());
        }
        overrides
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse and manage courses
    Courses {
        #[command(subcommand)]
        action: CourseAction,
    },

    /// Browse and manage topics
    Topics {
        #[command(subcommand)]
        action: TopicAction,
    },

    /// Browse and manage companies
    Companies {
        #[command(subcommand)]
        action: CompanyAction,
    },

    /// Read and write questions
    Question {
        #[command(subcommand)]
        action: QuestionAction,
    },

    /// Read and write comments on questions
    Comment {
        #[command(subcommand)]
        action: CommentAction,
    },

    /// Sign in with email and password
    Login {
        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Create an account
    Signup {
        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Show the signed-in user
    Whoami,

    /// Forget stored credentials
    Logout,

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Clone)]
pub enum CourseAction {
    /// List all courses
    List,
    /// Show a course and its questions
    Show { id: String },
    /// Create a course
    Create {
        /// Course number, e.g. "CS 61B"
        #[arg(long)]
        number: String,
        /// Course name
        #[arg(long)]
        name: String,
    },
    /// Change a course's name or number
    Rename {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        number: Option<String>,
    },
    /// Attach an existing question to a course
    AddQuestion { course_id: String, question_id: String },
}

#[derive(Subcommand, Clone)]
pub enum TopicAction {
    /// List topics, most questions first
    List,
    /// Show a topic and its questions
    Show { id: String },
    /// Create a topic (admins only)
    Create { name: String },
}

#[derive(Subcommand, Clone)]
pub enum CompanyAction {
    /// List all companies
    List,
    /// Show a company and its questions
    Show { id: String },
    /// Create a company
    Create { name: String },
}

#[derive(Subcommand, Clone)]
pub enum QuestionAction {
    /// Show a question with its solution and comments
    Show { id: String },
    /// Write a new question
    Create(QuestionArgs),
}

#[derive(Args, Clone, Default)]
pub struct QuestionArgs {
    /// Question title
    #[arg(long)]
    pub title: Option<String>,

    /// Question text
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the question text from a file (plain text or a saved document)
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Solution text
    #[arg(long, conflicts_with = "solution_file")]
    pub solution: Option<String>,

    /// Read the solution from a file (plain text or a saved document)
    #[arg(long)]
    pub solution_file: Option<PathBuf>,

    /// Tag as category:id, e.g. topic:5c9a1f (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Never prompt; fail if something is missing
    #[arg(long)]
    pub no_input: bool,
}

#[derive(Subcommand, Clone)]
pub enum CommentAction {
    /// Show a comment and its replies
    Show { id: String },
    /// Comment on a question, or reply to a comment
    Add {
        /// Question the comment belongs to
        question_id: String,
        /// Comment text
        text: String,
        /// Reply to this comment instead of the question
        #[arg(long)]
        reply_to: Option<String>,
    },
    /// Delete a comment
    Delete { id: String },
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Display the effective configuration
    Show,
    /// Create a new configuration file with defaults
    Init {
        /// Path for the new configuration file
        #[arg(long, default_value = "codeshack.json")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}
