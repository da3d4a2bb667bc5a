use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_enum {
    ($name:ident [$($value:ident),+]) => {

            #[derive(Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Debug)]
            pub enum $name {
                $(
                    $value,
                )*
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
                 let s = match self {
                      $(
                        $name::$value => stringify!($value),
                       )*
                    };
                    write!(f, "{}", s)
                }
            }

            impl $name {
                #[allow(dead_code)]
                pub fn parse(s: &str) -> Result<$name, &'static str> {
                  match s {
                      $(
                        stringify!($value) => Ok($name::$value),
                       )*
                        _ => Err("Could not parse value")
                    }
                }
            }
        }
}

string_enum! { EventStatus [Draft, Published, Closed] }
string_enum! { Roles [User, EventManager, Admin] }
string_enum! { TicketStatus [Pending, Confirmed, Cancelled] }

impl TicketStatus {
    /// The label dashboards show for a ticket's status. `Confirmed` reads as
    /// "Checked in"; other states pass through as-is.
    pub fn display_label(self) -> &'static str {
        match self {
            TicketStatus::Confirmed => "Checked in",
            TicketStatus::Pending => "Pending",
            TicketStatus::Cancelled => "Cancelled",
        }
    }

    /// Inverse of `display_label`, used to translate a dashboard filter value
    /// back to the stored status. Matching ignores case.
    pub fn from_display_label(label: &str) -> Option<TicketStatus> {
        match label.trim().to_lowercase().as_str() {
            "checked in" => Some(TicketStatus::Confirmed),
            "pending" => Some(TicketStatus::Pending),
            "cancelled" => Some(TicketStatus::Cancelled),
            _ => None,
        }
    }
}
