//! Tests for resolving config from the environment. These mutate
//! process wide env vars so they must run serially.

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use salsa_chat::core::{
        API_HOST_ENV, API_KEY_ENV, ChatConfig, DEFAULT_API_HOSTNAME, MODEL_ENV,
    };

    fn clear_env() {
        unsafe {
            env::remove_var(API_KEY_ENV);
            env::remove_var(API_HOST_ENV);
            env::remove_var(MODEL_ENV);
        }
    }

    #[test]
    #[serial]
    fn it_uses_defaults() {
        clear_env();
        let config = ChatConfig::resolve(None, None).unwrap();
        assert_eq!(config.api_hostname, DEFAULT_API_HOSTNAME);
        assert_eq!(config.api_key, "");
        assert_eq!(config.model.id, "mistralai/mistral-7b-instruct:free");
    }

    #[test]
    #[serial]
    fn it_reads_the_environment() {
        clear_env();
        unsafe {
            env::set_var(API_KEY_ENV, "env-key");
            env::set_var(API_HOST_ENV, "http://localhost:9999");
            env::set_var(MODEL_ENV, "3");
        }
        let config = ChatConfig::resolve(None, None).unwrap();
        clear_env();

        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.api_hostname, "http://localhost:9999");
        assert_eq!(config.model.id, "google/gemini-2.5-pro-exp:free");
    }

    #[test]
    #[serial]
    fn it_prefers_user_input_over_environment() {
        clear_env();
        unsafe {
            env::set_var(API_KEY_ENV, "env-key");
            env::set_var(MODEL_ENV, "3");
        }
        let config =
            ChatConfig::resolve(Some("user-key"), Some("deepseek/deepseek-chat-v3-0324")).unwrap();
        clear_env();

        assert_eq!(config.api_key, "user-key");
        assert_eq!(config.model.id, "deepseek/deepseek-chat-v3-0324");
    }

    #[test]
    #[serial]
    fn it_resets_the_user_key_to_the_environment() {
        clear_env();
        unsafe {
            env::set_var(API_KEY_ENV, "env-key");
        }
        let mut config = ChatConfig::resolve(Some("user-key"), None).unwrap();
        config.set_api_key("");
        clear_env();

        assert_eq!(config.api_key, "env-key");
    }

    #[test]
    #[serial]
    fn it_rejects_unknown_models() {
        clear_env();
        assert!(ChatConfig::resolve(None, Some("gpt-4o")).is_err());

        let mut config = ChatConfig::resolve(None, None).unwrap();
        assert!(config.set_model("gpt-4o").is_err());
        assert_eq!(config.model.id, "mistralai/mistral-7b-instruct:free");
        config.set_model("2").unwrap();
        assert_eq!(config.model.id, "deepseek/deepseek-chat-v3-0324");
    }
}
