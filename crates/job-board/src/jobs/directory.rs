use std::collections::BTreeMap;

/// Fixed table of organization ids known to the job board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationDirectory {
    names: BTreeMap<String, String>,
}

impl OrganizationDirectory {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: entries
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }

    /// Organizations registered in the 1C test base.
    pub fn standard() -> Self {
        Self::new([
            ("49ca8044-cdac-11f0-ae42-38d57ae2c1c1", "Студенческий отряд"),
            ("f2742040-cdb4-11f0-ae42-38d57ae2c1c1", "Волонтеры ДВФУ"),
            ("4c09ed30-cdb6-11f0-ae42-38d57ae2c1c1", "ЦПД"),
            ("76fa74fd-ea4f-11f0-ae6f-38d57ae2c1c1", "CODE WORK"),
        ])
    }

    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Display name for `value` when it is a known id, otherwise `value`
    /// itself so organizations missing from the table still round-trip.
    pub fn display_name<'a>(&'a self, value: &'a str) -> &'a str {
        self.resolve(value).unwrap_or(value)
    }
}

/// Logins that belong to an organization account. Everyone else is a student.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountDirectory {
    organizations: BTreeMap<String, String>,
}

impl AccountDirectory {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            organizations: entries
                .into_iter()
                .map(|(login, organization)| (login.into(), organization.into()))
                .collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new([("ivanov.iv", "f2742040-cdb4-11f0-ae42-38d57ae2c1c1")])
    }

    /// Organization id for `login`, empty for students and unknown logins.
    pub fn organization_for(&self, login: &str) -> &str {
        self.organizations
            .get(login.trim())
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_pass_through_as_display_names() {
        let directory = OrganizationDirectory::standard();
        assert_eq!(
            directory.resolve("76fa74fd-ea4f-11f0-ae6f-38d57ae2c1c1"),
            Some("CODE WORK")
        );
        assert_eq!(
            directory.display_name("4c09ed30-cdb6-11f0-ae42-38d57ae2c1c1"),
            "ЦПД"
        );
        assert_eq!(directory.display_name("Новая организация"), "Новая организация");
        assert_eq!(directory.resolve("Новая организация"), None);
    }

    #[test]
    fn students_have_no_organization() {
        let accounts = AccountDirectory::standard();
        assert_eq!(
            accounts.organization_for("ivanov.iv"),
            "f2742040-cdb4-11f0-ae42-38d57ae2c1c1"
        );
        assert_eq!(accounts.organization_for("ivanov.ii"), "");
        assert_eq!(accounts.organization_for(""), "");
    }
}
