//=========================================================================
// Input System
//
// Input events and the source the driver drains them from every frame.
//
// Responsibilities:
// - Define the platform-independent `InputEvent`
// - Define the `InputSource` seam polled once per driver iteration
// - Provide `ChannelInput`, a crossbeam-backed source fed by the platform
//
// Notes:
// The window callbacks and the driver run on the same thread. The channel
// only decouples the producer (platform) from the consumer (driver) so the
// driver can also be fed from tests or another thread.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;

//=== External Crates =====================================================

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::{debug, trace};

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode};

//=== InputSource =========================================================

/// Producer of discrete input events.
///
/// Polled once per driver iteration; every pending event is appended to
/// `out` in arrival order.
pub trait InputSource {
    fn poll_events(&mut self, out: &mut Vec<InputEvent>);
}

//=== ChannelInput ========================================================

/// [`InputSource`] draining a crossbeam channel.
///
/// When every sender has been dropped the source reports a single
/// [`InputEvent::Quit`], so a vanished platform shuts the demo down.
pub struct ChannelInput {
    receiver: Receiver<InputEvent>,
    disconnected: bool,
}

impl ChannelInput {
    pub fn new(receiver: Receiver<InputEvent>) -> Self {
        Self {
            receiver,
            disconnected: false,
        }
    }

    /// Creates an unbounded channel and wraps its receiving end.
    pub fn channel() -> (Sender<InputEvent>, Self) {
        let (tx, rx) = unbounded();
        (tx, Self::new(rx))
    }
}

impl InputSource for ChannelInput {
    fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => {
                    trace!(target: "platform::input", "Input event: {:?}", event);
                    out.push(event);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.disconnected {
                        debug!(target: "platform::input", "Input channel disconnected, reporting quit");
                        self.disconnected = true;
                        out.push(InputEvent::Quit);
                    }
                    break;
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
