//! Command routing logic for CLI

use crate::args::{
    Cli, CommentAction, Commands, CompanyAction, ConfigAction, CourseAction, QuestionAction,
    TopicAction,
};
use crate::commands;
use crate::console::CLIConsole;
use codeshack_core::{Actions, CodeShackResult, Config};

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli, config: Config) -> CodeShackResult<()> {
    let mut console = CLIConsole::new(cli.verbose);

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&console, &config),
            ConfigAction::Init { path, force } => commands::config::init(&console, &path, force),
        },
        Commands::Login { email } => commands::auth::login(&mut console, &config, email).await,
        Commands::Signup { email } => commands::auth::signup(&mut console, &config, email).await,
        Commands::Logout => commands::auth::logout(&console, &config),
        Commands::Whoami => {
            let actions = Actions::connect(&config)?;
            commands::auth::whoami(&mut console, &actions).await
        }
        Commands::Courses { action } => {
            let actions = Actions::connect(&config)?;
            route_courses(&mut console, &actions, action).await
        }
        Commands::Topics { action } => {
            let actions = Actions::connect(&config)?;
            route_topics(&mut console, &actions, action).await
        }
        Commands::Companies { action } => {
            let actions = Actions::connect(&config)?;
            route_companies(&mut console, &actions, action).await
        }
        Commands::Question { action } => {
            let actions = Actions::connect(&config)?;
            match action {
                QuestionAction::Show { id } => {
                    commands::question::show(&mut console, &actions, &id).await
                }
                QuestionAction::Create(args) => {
                    commands::question::create(&mut console, &actions, args).await
                }
            }
        }
        Commands::Comment { action } => {
            let actions = Actions::connect(&config)?;
            match action {
                CommentAction::Show { id } => {
                    commands::comment::show(&console, &actions, &id).await
                }
                CommentAction::Add {
                    question_id,
                    text,
                    reply_to,
                } => {
                    commands::comment::add(&console, &actions, &question_id, text, reply_to).await
                }
                CommentAction::Delete { id } => {
                    commands::comment::delete(&console, &actions, &id).await
                }
            }
        }
    }
}

async fn route_courses(
    console: &mut CLIConsole,
    actions: &Actions,
    action: CourseAction,
) -> CodeShackResult<()> {
    match action {
        CourseAction::List => commands::catalog::list_courses(console, actions).await,
        CourseAction::Show { id } => commands::catalog::show_course(console, actions, &id).await,
        CourseAction::Create { number, name } => {
            commands::catalog::create_course(console, actions, number, name).await
        }
        CourseAction::Rename { id, name, number } => {
            commands::catalog::rename_course(console, actions, &id, name, number).await
        }
        CourseAction::AddQuestion {
            course_id,
            question_id,
        } => commands::catalog::add_question_to_course(console, actions, &course_id, &question_id)
            .await,
    }
}

async fn route_topics(
    console: &mut CLIConsole,
    actions: &Actions,
    action: TopicAction,
) -> CodeShackResult<()> {
    match action {
        TopicAction::List => commands::catalog::list_topics(console, actions).await,
        TopicAction::Show { id } => commands::catalog::show_topic(console, actions, &id).await,
        TopicAction::Create { name } => {
            commands::catalog::create_topic(console, actions, name).await
        }
    }
}

async fn route_companies(
    console: &mut CLIConsole,
    actions: &Actions,
    action: CompanyAction,
) -> CodeShackResult<()> {
    match action {
        CompanyAction::List => commands::catalog::list_companies(console, actions).await,
        CompanyAction::Show { id } => commands::catalog::show_company(console, actions, &id).await,
        CompanyAction::Create { name } => {
            commands::catalog::create_company(console, actions, name).await
        }
    }
}
