use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component.
///
/// При монтировании восстанавливает сессию: сначала показывает
/// кэшированного пользователя из localStorage, затем проверяет токен
/// запросом /me и при необходимости обновляет его через refresh.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        let Some(access_token) = storage::get_access_token() else {
            return;
        };

        // Быстрый путь: кэшированный пользователь, без ожидания сети
        if let Some(user_info) = storage::get_user_info() {
            set_auth_state.set(AuthState {
                access_token: Some(access_token.clone()),
                user_info: Some(user_info),
            });
        }

        spawn_local(async move {
            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    storage::save_user_info(&user_info);
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(_) => {
                    // Токен протух, пробуем refresh
                    let Some(refresh_token) = storage::get_refresh_token() else {
                        storage::clear_tokens();
                        set_auth_state.set(AuthState::default());
                        return;
                    };
                    match api::refresh(refresh_token).await {
                        Ok(response) => {
                            storage::save_access_token(&response.access_token);
                            match api::get_current_user(&response.access_token).await {
                                Ok(user_info) => {
                                    storage::save_user_info(&user_info);
                                    set_auth_state.set(AuthState {
                                        access_token: Some(response.access_token),
                                        user_info: Some(user_info),
                                    });
                                }
                                Err(_) => {
                                    storage::clear_tokens();
                                    set_auth_state.set(AuthState::default());
                                }
                            }
                        }
                        Err(_) => {
                            storage::clear_tokens();
                            set_auth_state.set(AuthState::default());
                        }
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Завершить сессию: отозвать refresh токен и сбросить состояние
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        let _ = api::logout(refresh_token).await;
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
