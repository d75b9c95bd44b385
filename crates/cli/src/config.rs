use siteprov::{config::AppConfig, config::loader::ApplyToConfg, site::Lcid};

use crate::cli::ClapCli;

impl ApplyToConfg for ClapCli {
    fn apply_to_config(&self, mut config: AppConfig) -> AppConfig {
        if let Some(kind) = self.connection_kind {
            *config.connection_kind_mut() = kind;
        }

        if let Some(locale) = self.locale {
            *config.locale_mut() = Lcid::new(locale);
        }

        // Flags can only switch these on (or colors off); an absent flag keeps the file's value
        *config.verbose_mut() = self.verbose || config.verbose();
        *config.use_colors_mut() = !self.no_color && config.use_colors();

        config
    }
}
