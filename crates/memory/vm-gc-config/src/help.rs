//! Help listing for the `help` pseudo-option

use crate::config::GcConfig;

/// Render the option listing with the current values of `config` filled in.
pub fn render_help(config: &GcConfig) -> String {
    format!(
        "GC options are specified as white space separated assignments:
    disable:0|1    - start disabled
    profile:0|1|2  - enable profiling with summary when terminating program ({})
    precise:0|1    - enable precise scanning (not implemented yet)
    concurrent:0|1 - enable concurrent collection (not implemented yet)

    initReserve:N  - initial memory to reserve in MB ({})
    minPoolSize:N  - initial and minimum pool size in MB ({})
    maxPoolSize:N  - maximum pool size in MB ({})
    incPoolSize:N  - pool size increment MB ({})
    heapSizeFactor:N - targeted heap size to used memory ratio ({})
",
        config.profile,
        config.init_reserve,
        config.min_pool_size,
        config.max_pool_size,
        config.inc_pool_size,
        config.heap_size_factor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::OPTIONS;

    #[test]
    fn test_help_lists_every_option() {
        let text = render_help(&GcConfig::default());
        for option in OPTIONS.iter() {
            assert!(
                text.contains(&format!("    {}:", option.name)),
                "help is missing {}",
                option.name
            );
        }
    }

    #[test]
    fn test_help_shows_defaults() {
        let text = render_help(&GcConfig::default());
        assert!(text.starts_with("GC options are specified as white space separated assignments:\n"));
        assert!(text.contains("terminating program (0)"));
        assert!(text.contains("initial memory to reserve in MB (0)"));
        assert!(text.contains("initial and minimum pool size in MB (1)"));
        assert!(text.contains("maximum pool size in MB (64)"));
        assert!(text.contains("pool size increment MB (3)"));
        assert!(text.contains("used memory ratio (2)"));
        assert!(text.ends_with(")\n"));
    }

    #[test]
    fn test_help_shows_current_values() {
        let config = GcConfig {
            max_pool_size: 256,
            heap_size_factor: 1.5,
            ..GcConfig::default()
        };
        let text = render_help(&config);
        assert!(text.contains("maximum pool size in MB (256)"));
        assert!(text.contains("used memory ratio (1.5)"));
    }
}
