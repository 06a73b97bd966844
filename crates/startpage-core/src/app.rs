use anyhow::Result;
use std::ops::ControlFlow;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::{Component, ComponentContext, Config, PageEvent};

/// Receives page events in the order components sent them
pub trait EventHandler {
    fn handle(&mut self, event: PageEvent) -> ControlFlow<()>;
}

/// Main application state and lifecycle manager
pub struct App {
    config: Arc<Config>,
    components: Vec<Box<dyn Component>>,
    context: ComponentContext,
    events: mpsc::UnboundedReceiver<PageEvent>,
}

impl App {
    /// Create an application from a loaded configuration
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let (sender, events) = crate::event::channel();
        let context = ComponentContext::new(config.clone(), sender);

        Self {
            config,
            components: Vec::new(),
            context,
            events,
        }
    }

    /// Register a component with the application
    pub fn register_component(&mut self, component: Box<dyn Component>) {
        tracing::info!("Registering component: {}", component.name());
        self.components.push(component);
    }

    /// Start all registered components. Must be called inside a tokio runtime.
    pub fn initialize(&mut self) -> Result<()> {
        tracing::info!(
            "Initializing application with {} components",
            self.components.len()
        );

        for component in &mut self.components {
            tracing::debug!("Starting component: {}", component.id());
            component.start(&self.context)?;
        }

        tracing::info!("Application initialized successfully");
        Ok(())
    }

    /// Drain page events into `handler` until a `Quit` event or a handler
    /// break. `App` holds a sender itself, so the loop never ends just
    /// because every component finished.
    pub async fn run<H: EventHandler>(&mut self, handler: &mut H) {
        while let Some(event) = self.events.recv().await {
            if event == PageEvent::Quit {
                tracing::debug!("Quit requested");
                break;
            }
            if handler.handle(event).is_break() {
                break;
            }
        }
    }

    /// Shutdown the application and all components
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");

        for component in &mut self.components {
            tracing::debug!("Shutting down component: {}", component.name());
            if let Err(e) = component.shutdown() {
                tracing::error!("Error shutting down component {}: {}", component.name(), e);
            }
        }

        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Context shared with components
    pub fn context(&self) -> &ComponentContext {
        &self.context
    }

    /// Get list of all registered components
    pub fn components(&self) -> &[Box<dyn Component>] {
        &self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Region, TaskCommand};

    struct Greeter;

    impl Component for Greeter {
        fn id(&self) -> &str {
            "greeter"
        }

        fn name(&self) -> &str {
            "Greeter"
        }

        fn start(&mut self, ctx: &ComponentContext) -> Result<()> {
            let events = ctx.events.clone();
            tokio::spawn(async move {
                events.set_text(Region::Location, "Test");
                events.send(PageEvent::Task(TaskCommand::DeleteCompleted));
                events.send(PageEvent::Quit);
                events.set_text(Region::Time, "never seen");
            });
            Ok(())
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<PageEvent>);

    impl EventHandler for Recorder {
        fn handle(&mut self, event: PageEvent) -> ControlFlow<()> {
            self.0.push(event);
            ControlFlow::Continue(())
        }
    }

    #[tokio::test]
    async fn test_events_delivered_in_order_until_quit() {
        let mut app = App::new(Config::default());
        app.register_component(Box::new(Greeter));
        app.initialize().unwrap();

        let mut recorder = Recorder::default();
        app.run(&mut recorder).await;

        assert_eq!(
            recorder.0,
            vec![
                PageEvent::SetText {
                    region: Region::Location,
                    text: "Test".to_string()
                },
                PageEvent::Task(TaskCommand::DeleteCompleted),
            ]
        );
        app.shutdown().unwrap();
    }

    #[test]
    fn test_register_component() {
        let mut app = App::new(Config::default());
        app.register_component(Box::new(Greeter));
        assert_eq!(app.components().len(), 1);
        assert_eq!(app.components()[0].id(), "greeter");
    }
}
