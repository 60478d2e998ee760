use ira_core::entities::{Credentials, ProfileUpdate, User};
use ira_views::UserHook;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct WhoAmI {
    authenticated: bool,
    user: Option<User>,
}

#[derive(Serialize)]
struct LoginReport {
    user: User,
    token_type: String,
    access_token: String,
    hint: &'static str,
}

/// Handle `ira auth`.
pub async fn handle(action: &AuthCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let users = &ctx.services.users;
    match action {
        AuthCommands::Whoami => {
            let hook = UserHook::new(users.clone());
            hook.load().await;
            let state = hook.state();
            if let Some(error) = state.error {
                anyhow::bail!(error);
            }
            output(
                &WhoAmI {
                    authenticated: state.data.is_some(),
                    user: state.data,
                },
                flags.format,
            )
        }
        AuthCommands::Login { name, password } => {
            let token = users
                .login(&Credentials {
                    display_name: name.clone(),
                    password: password.clone(),
                })
                .await?;
            output(
                &LoginReport {
                    user: token.user,
                    token_type: token.token_type,
                    access_token: token.access_token,
                    hint: "export IRA_API__TOKEN=<access_token> to authenticate later commands",
                },
                flags.format,
            )
        }
        AuthCommands::Register { name, password } => {
            let user = users
                .register(&Credentials {
                    display_name: name.clone(),
                    password: password.clone(),
                })
                .await?;
            output(&user, flags.format)
        }
        AuthCommands::Update {
            display_name,
            password,
        } => {
            if display_name.is_none() && password.is_none() {
                anyhow::bail!("nothing to update: pass --display-name or --password");
            }
            let changes = ProfileUpdate {
                display_name: display_name.clone(),
                password: password.clone(),
            };
            let hook = UserHook::new(users.clone());
            hook.load().await;
            if let Some(error) = hook.state().error {
                anyhow::bail!(error);
            }
            if !hook.is_authenticated() {
                anyhow::bail!("not signed in: run `ira auth login` and set IRA_API__TOKEN");
            }
            output(&users.update_profile(&changes).await?, flags.format)
        }
    }
}
