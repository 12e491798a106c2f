use serde::{Deserialize, Serialize};

/// Channel over which an agent can be contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationType {
    Email,
    Landline,
    Mobile,
    Facsimile,
    Web,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Communication {
    pub communication_type: CommunicationType,
    pub details: String,
}

/// Listing agent. `order` is the 1-based position in the vendor feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub order: u32,
    pub communications: Vec<Communication>,
}

impl Agent {
    /// Adds channels not already present on this agent.
    pub fn absorb_communications(&mut self, communications: Vec<Communication>) {
        for communication in communications {
            if !self.communications.contains(&communication) {
                self.communications.push(communication);
            }
        }
    }
}
