use crate::config::ConfigLookup;
use mshop_domain::locale::Locale;
use mshop_logger::{Log, TracingLog};
use private::Sealed;
use std::ops::Deref;
use std::sync::Arc;

/// Everything a manager needs from the request it serves: configuration, locale and logger.
///
/// Cheap to clone; all clones share the same configuration and logger.
#[derive(Debug, Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

#[derive(Debug)]
pub struct ContextInner {
    config: Arc<dyn ConfigLookup>,
    locale: Locale,
    log: Arc<dyn Log>,
}

impl ContextInner {
    #[must_use]
    pub fn config(&self) -> &dyn ConfigLookup {
        self.config.as_ref()
    }

    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    #[must_use]
    pub fn log(&self) -> &dyn Log {
        self.log.as_ref()
    }
}

impl Deref for Context {
    type Target = ContextInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Context {
    #[must_use = "Creates a context builder; a configuration source is required"]
    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    /// Same configuration and logger, different locale.
    #[must_use]
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                config: Arc::clone(&self.inner.config),
                locale,
                log: Arc::clone(&self.inner.log),
            }),
        }
    }

    /// Shared handle to the configuration.
    #[must_use]
    pub fn config_handle(&self) -> Arc<dyn ConfigLookup> {
        Arc::clone(&self.inner.config)
    }
}

#[derive(Debug, Default)]
pub struct NoConfig;
#[derive(Debug)]
pub struct WithConfig(Arc<dyn ConfigLookup>);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoConfig {}
impl Sealed for WithConfig {}

#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct ContextBuilder<S: Sealed = NoConfig> {
    state: S,
    locale: Option<Locale>,
    log: Option<Arc<dyn Log>>,
}

#[allow(private_bounds)]
impl<S: Sealed> ContextBuilder<S> {
    #[must_use = "Sets the locale the context serves"]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Logger handed to managers. Defaults to [`TracingLog`].
    #[must_use = "Sets the logger managers write to"]
    pub fn log(mut self, log: Arc<dyn Log>) -> Self {
        self.log = Some(log);
        self
    }

    fn transition<N: Sealed>(self, state: N) -> ContextBuilder<N> {
        ContextBuilder { state, locale: self.locale, log: self.log }
    }
}

impl ContextBuilder<NoConfig> {
    #[must_use = "Sets the configuration source"]
    pub fn config(self, config: impl ConfigLookup + 'static) -> ContextBuilder<WithConfig> {
        self.transition(WithConfig(Arc::new(config)))
    }

    #[must_use = "Sets a shared configuration source"]
    pub fn shared_config(self, config: Arc<dyn ConfigLookup>) -> ContextBuilder<WithConfig> {
        self.transition(WithConfig(config))
    }
}

impl ContextBuilder<WithConfig> {
    #[must_use]
    pub fn build(self) -> Context {
        let Self { state: WithConfig(config), locale, log } = self;
        Context {
            inner: Arc::new(ContextInner {
                config,
                locale: locale.unwrap_or_default(),
                log: log.unwrap_or_else(|| Arc::new(TracingLog::default())),
            }),
        }
    }
}
