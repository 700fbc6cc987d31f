//! Macros for declaring configurations inline.

/// Build a [`Config`](crate::core::Config) from a declarative table.
///
/// State and event names are written as identifiers.
///
/// # Example
///
/// ```
/// use rewind::fsm_config;
///
/// let config = fsm_config! {
///     initial: off,
///     states: {
///         off: { turnOn => on },
///         on: { turnOff => off, dim => dimmed },
///         dimmed: {},
///     }
/// };
///
/// assert_eq!(config.initial, "off");
/// assert_eq!(config.target("on", "dim"), Some("dimmed"));
/// assert!(config.contains("dimmed"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident : { $( $event:ident => $target:ident ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = ::std::collections::BTreeMap::new();
        $(
            let def = $crate::core::StateDef::new()
                $( .on(stringify!($event), stringify!($target)) )*;
            states.insert(stringify!($state).to_string(), def);
        )*
        $crate::core::Config::new(stringify!($initial), states)
    }};
}

#[cfg(test)]
mod tests {
    use crate::builder::ConfigBuilder;

    #[test]
    fn fsm_config_macro_builds_config() {
        let config = fsm_config! {
            initial: off,
            states: {
                off: { turnOn => on },
                on: { turnOff => off },
            }
        };

        let expected = ConfigBuilder::new()
            .initial("off")
            .state("off", |s| s.on("turnOn", "on"))
            .state("on", |s| s.on("turnOff", "off"))
            .build()
            .unwrap();

        assert_eq!(config, expected);
    }

    #[test]
    fn fsm_config_supports_empty_states() {
        let config = fsm_config! {
            initial: idle,
            states: {
                idle: { start => running },
                running: { stop => idle, finish => done },
                done: {}
            }
        };

        assert!(config.contains("done"));
        assert!(config.state("done").unwrap().transitions.is_empty());
        assert_eq!(config.states.len(), 3);
    }

    #[test]
    fn fsm_config_does_not_validate() {
        let config = fsm_config! {
            initial: nowhere,
            states: {
                a: { go => ghost },
            }
        };

        assert!(!config.is_well_formed());
    }
}
