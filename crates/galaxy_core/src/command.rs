//! Field commands and the channel that carries them
//!
//! Input handling never touches the field directly. It sends a
//! [`FieldCommand`] through a [`CommandSender`]; the render loop drains the
//! [`CommandQueue`] once per frame and hands each command to the
//! [`FieldManager`](crate::FieldManager).

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::config::FieldSpec;

/// A requested change to the current field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldCommand {
    SetCount(u32),
    SetRadius(f32),
    SetBranchCount(u32),
    SetSpin(f32),
    SetRandomness(f32),
    SetRandomnessPower(f32),
    SetPointSize(f32),
    SetRotationSpeed(f32),
    /// Swap in a whole new spec (e.g. from a preset)
    Replace(FieldSpec),
    /// Reset the random source to a seed and regenerate
    Reseed(u64),
    /// Regenerate the current spec with fresh samples
    Regenerate,
}

impl FieldCommand {
    /// Name of the parameter this command edits, if any
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            FieldCommand::SetCount(_) => Some("count"),
            FieldCommand::SetRadius(_) => Some("radius"),
            FieldCommand::SetBranchCount(_) => Some("branch_count"),
            FieldCommand::SetSpin(_) => Some("spin_factor"),
            FieldCommand::SetRandomness(_) => Some("randomness_amount"),
            FieldCommand::SetRandomnessPower(_) => Some("randomness_power"),
            FieldCommand::SetPointSize(_) => Some("point_size"),
            FieldCommand::SetRotationSpeed(_) => Some("rotation_speed"),
            FieldCommand::Replace(_) | FieldCommand::Reseed(_) | FieldCommand::Regenerate => None,
        }
    }
}

/// Cloneable sending half of a [`CommandQueue`]
#[derive(Clone)]
pub struct CommandSender {
    sender: Sender<FieldCommand>,
}

impl CommandSender {
    /// Queue a command for the next frame
    pub fn send(&self, command: FieldCommand) {
        // The queue owns the receiver, so this only fails after shutdown
        if self.sender.send(command).is_err() {
            log::debug!("Dropped {:?}: command queue closed", command);
        }
    }
}

/// Per-frame command queue
pub struct CommandQueue {
    sender: Sender<FieldCommand>,
    receiver: Receiver<FieldCommand>,
}

impl CommandQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Get a sender that input handlers can hold on to
    pub fn sender(&self) -> CommandSender {
        CommandSender {
            sender: self.sender.clone(),
        }
    }

    /// Queue a command directly
    pub fn push(&self, command: FieldCommand) {
        // Both halves live in self, so the channel cannot be disconnected here
        let _ = self.sender.send(command);
    }

    /// Take every queued command in arrival order (non-blocking)
    pub fn drain(&self) -> Vec<FieldCommand> {
        self.receiver.try_iter().collect()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empty() {
        let queue = CommandQueue::new();
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_drain_preserves_order() {
        let queue = CommandQueue::new();
        let sender = queue.sender();
        sender.send(FieldCommand::SetCount(100));
        queue.push(FieldCommand::SetSpin(-1.0));
        sender.send(FieldCommand::Regenerate);

        assert_eq!(
            queue.drain(),
            vec![
                FieldCommand::SetCount(100),
                FieldCommand::SetSpin(-1.0),
                FieldCommand::Regenerate,
            ]
        );
        // Drained commands are gone
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_cloned_senders_share_queue() {
        let queue = CommandQueue::new();
        let a = queue.sender();
        let b = a.clone();
        a.send(FieldCommand::Reseed(1));
        b.send(FieldCommand::Reseed(2));
        assert_eq!(queue.drain().len(), 2);
    }

    #[test]
    fn test_parameter_names() {
        assert_eq!(FieldCommand::SetBranchCount(3).parameter(), Some("branch_count"));
        assert_eq!(FieldCommand::Regenerate.parameter(), None);
    }
}
