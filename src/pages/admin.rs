use dioxus::prelude::*;

struct AccountRow {
    username: &'static str,
    role: &'static str,
    status: &'static str,
}

// Placeholder content until the sync backend lands.
const ACCOUNTS: &[AccountRow] = &[
    AccountRow {
        username: "admin",
        role: "Administrator",
        status: "Active",
    },
    AccountRow {
        username: "steve",
        role: "Member",
        status: "Active",
    },
    AccountRow {
        username: "alex",
        role: "Member",
        status: "Suspended",
    },
];

#[component]
pub fn AdminPage() -> Element {
    rsx! {
        div { class: "page",
            h2 { class: "page-title", "Admin console" }
            table { class: "account-table",
                thead {
                    tr {
                        th { "Username" }
                        th { "Role" }
                        th { "Status" }
                    }
                }
                tbody {
                    for account in ACCOUNTS {
                        tr {
                            td { "{account.username}" }
                            td { "{account.role}" }
                            td { "{account.status}" }
                        }
                    }
                }
            }
        }
    }
}
