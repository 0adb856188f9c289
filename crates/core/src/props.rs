//! Bindings handed to a rendering layer.
//!
//! A renderer spreads [`InputProps`] onto its file-chooser control and
//! [`RootProps`] onto its drop region, then routes the events those bindings
//! name back through [`AttachmentController::dispatch`].

use serde::Serialize;

use crate::attachment::{AttachOutcome, AttachmentController};
use crate::event::AttachEvent;
use crate::preview::PreviewRegistry;

/// Form field name of the file-chooser control.
pub const INPUT_NAME: &str = "uploader";

/// Which controller operation a bound event handler invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Handler {
    /// Attach the files carried by the event.
    Attach,
}

/// Attributes and handlers for the file-chooser control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputProps {
    /// Form field name.
    pub name: &'static str,
    /// Handler for the input's change event.
    pub on_change: Handler,
    /// Whether the control allows selecting several files.
    pub multiple: bool,
    /// Value of the control's `accept` attribute, if restricted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
}

/// Handlers for the drop region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootProps {
    /// Handler for the region's drop event.
    pub on_drop: Handler,
}

impl<R: PreviewRegistry> AttachmentController<R> {
    /// Bindings for the file-chooser control.
    #[must_use]
    pub fn input_props(&self) -> InputProps {
        InputProps {
            name: INPUT_NAME,
            on_change: Handler::Attach,
            multiple: self.policy().multiple,
            accept: self
                .policy()
                .accept
                .as_ref()
                .map(|accept| accept.as_str().to_string()),
        }
    }

    /// Bindings for the drop region.
    #[must_use]
    pub fn root_props(&self) -> RootProps {
        RootProps {
            on_drop: Handler::Attach,
        }
    }

    /// Run the operation a bound handler names.
    pub fn dispatch(&mut self, handler: Handler, event: &mut AttachEvent) -> AttachOutcome {
        match handler {
            Handler::Attach => self.handle_attach(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::{ControllerOptions, FileHandle};
    use crate::validation::Policy;

    #[test]
    fn test_input_props_by_default() {
        let controller = AttachmentController::new(ControllerOptions::default());
        let props = controller.input_props();

        assert_eq!(props.name, "uploader");
        assert_eq!(props.on_change, Handler::Attach);
        assert!(!props.multiple);
        assert!(props.accept.is_none());
    }

    #[test]
    fn test_input_props_reflect_policy() {
        let policy = Policy::new().with_multiple(true).with_accept("image/*");
        let controller = AttachmentController::new(ControllerOptions::new(policy));
        let props = controller.input_props();

        assert!(props.multiple);
        assert_eq!(props.accept.as_deref(), Some("image/*"));
    }

    #[test]
    fn test_dispatch_through_root_props() {
        let mut controller = AttachmentController::new(ControllerOptions::default());
        let handler = controller.root_props().on_drop;

        let mut event = AttachEvent::drop(vec![FileHandle::new("a.txt", 1)]);
        let outcome = controller.dispatch(handler, &mut event);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(controller.accepted_files().len(), 1);
        assert!(event.default_prevented());
    }

    #[test]
    fn test_input_props_serialize_without_accept() {
        let controller = AttachmentController::new(ControllerOptions::default());
        let json = serde_json::to_value(controller.input_props()).unwrap();
        assert_eq!(json["name"], "uploader");
        assert_eq!(json["on_change"], "attach");
        assert!(json.get("accept").is_none());
    }
}
