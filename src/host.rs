use crate::error::ModalError;
use crate::events::{Event, Input, InputContext};
use crate::graph::{Graph, NodeId};
use crate::modal::{Modal, ModalProps, MODAL};
use crate::primitive::Primitive;
use crossbeam::channel::{self, Receiver, Sender, TryRecvError};

/// Messages delivered to a running modal.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Raw input addressed to one of the modal's primitives.
    Input(Input, InputContext),
    /// An event emitted by a node inside the modal.
    Event(Event, NodeId),
}

/// Runs the modal instance found in a parent graph.
///
/// Messages are queued and handled one at a time, in order, whenever `poll` is called.
#[derive(Debug)]
pub struct Host {
    modal: Modal,
    inbox: Receiver<Message>,
    sender: Sender<Message>,
}

impl Host {
    /// Starts the modal in `parent`, sending its events to `upward`.
    ///
    /// Returns `None` if the parent graph has no modal.
    pub fn start(parent: &Graph, upward: Sender<Event>) -> Result<Option<Host>, ModalError> {
        let node = match parent.get(MODAL) {
            Ok(node) => node,
            Err(_) => return Ok(None),
        };
        let props = match &node.primitive {
            Primitive::Component(component) => component.props::<ModalProps>(),
            _ => None,
        }
        .ok_or_else(|| ModalError::NotAModal(MODAL.to_string()))?;

        let spec = Modal::validate(&props.spec)?;
        let modal = Modal::construct(spec, &props.options, upward)?;
        let (sender, inbox) = channel::unbounded();

        Ok(Some(Host {
            modal,
            inbox,
            sender,
        }))
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Returns a sender for delivering messages to the modal.
    pub fn sender(&self) -> Sender<Message> {
        self.sender.clone()
    }

    /// Queues input, targeting whatever is under its location in the modal graph.
    pub fn send_input(&self, input: Input) {
        let target = input
            .location()
            .and_then(|location| self.modal.graph().hit_test(location))
            .map(String::from);
        self.enqueue(Message::Input(input, InputContext { target }));
    }

    /// Queues an event emitted by the node with the given identifier.
    ///
    /// Events from unknown identifiers are attributed to the content group.
    pub fn send_event(&self, event: Event, source: &str) {
        let graph = self.modal.graph();
        let source = graph
            .node_id(source)
            .or_else(|| graph.node_id(crate::modal::CONTENT))
            .unwrap_or_else(|| graph.root());
        self.enqueue(Message::Event(event, source));
    }

    fn enqueue(&self, message: Message) {
        // we hold the receiver, so this can't fail
        let _ = self.sender.send(message);
    }

    /// Handles all queued messages and returns how many there were.
    pub fn poll(&mut self) -> usize {
        let mut handled = 0;
        loop {
            match self.inbox.try_recv() {
                Ok(message) => {
                    self.recv_message(message);
                    handled += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        handled
    }

    fn recv_message(&mut self, message: Message) {
        match message {
            Message::Input(input, context) => self.modal.handle_input(&input, &context),
            Message::Event(event, source) => {
                self.modal.filter_event(event, source);
            }
        }
    }
}
