//! Searchable columns of the supplier tables.

use mshop_domain::constants::{DEFAULT_IMPLEMENTATION, SUPPLIER};
use mshop_domain::search::{AttributeKind, SearchAttribute};
use mshop_manager::{ImplName, ManagerError, ManagerLocation, TypeName};
use AttributeKind::{Datetime, Float, Integer, String as Text};

/// A searchable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub column: &'static str,
    pub label: &'static str,
    pub kind: AttributeKind,
    pub public: bool,
}

const fn field(key: &'static str, column: &'static str, label: &'static str, kind: AttributeKind) -> Field {
    Field { key, column, label, kind, public: true }
}

const fn private(key: &'static str, column: &'static str, label: &'static str, kind: AttributeKind) -> Field {
    Field { key, column, label, kind, public: false }
}

/// Table backing one manager of the supplier tree.
#[derive(Debug, PartialEq, Eq)]
pub struct Table {
    /// Sub-manager path, `None` for the root manager.
    pub path: Option<&'static str>,
    /// Alias used in internal attribute codes.
    pub alias: &'static str,
    pub fields: &'static [Field],
    /// Sub-managers searched when none are configured.
    pub submanagers: &'static [&'static str],
}

impl Table {
    /// Public code prefix: `supplier`, `supplier.lists.type`, ...
    #[must_use]
    pub fn code(&self) -> String {
        match self.path {
            Some(path) => format!("{SUPPLIER}.{}", path.replace('/', ".")),
            None => SUPPLIER.to_owned(),
        }
    }

    /// Type name of the standard implementation.
    ///
    /// # Errors
    /// [`ManagerError::Validation`] if `path` is not a valid manager path.
    pub fn class(&self) -> Result<TypeName, ManagerError> {
        let location = ManagerLocation::parse(SUPPLIER, self.path)?;
        Ok(location.class(&ImplName::try_from(DEFAULT_IMPLEMENTATION)?))
    }

    #[must_use]
    pub fn attributes(&self) -> Vec<SearchAttribute> {
        let code = self.code();
        self.fields
            .iter()
            .map(|field| {
                let attribute = SearchAttribute::new(
                    format!("{code}.{}", field.key),
                    format!("{}.\"{}\"", self.alias, field.column),
                    field.label,
                    field.kind,
                );
                if field.public { attribute } else { attribute.private() }
            })
            .collect()
    }
}

pub static SUPPLIER_TABLE: Table = Table {
    path: None,
    alias: "mssup",
    fields: &[
        field("id", "id", "ID", Integer),
        private("siteid", "siteid", "Site ID", Text),
        field("code", "code", "Code", Text),
        field("label", "label", "Label", Text),
        field("status", "status", "Status", Integer),
        field("ctime", "ctime", "Create date/time", Datetime),
        field("mtime", "mtime", "Modify date/time", Datetime),
        field("editor", "editor", "Editor", Text),
    ],
    submanagers: &["address", "lists"],
};

pub static ADDRESS_TABLE: Table = Table {
    path: Some("address"),
    alias: "mssupad",
    fields: &[
        field("id", "id", "Address ID", Integer),
        private("siteid", "siteid", "Address site ID", Text),
        private("parentid", "parentid", "Address parent ID", Integer),
        field("company", "company", "Address company", Text),
        field("vatid", "vatid", "Address VAT ID", Text),
        field("salutation", "salutation", "Address salutation", Text),
        field("title", "title", "Address title", Text),
        field("firstname", "firstname", "Address first name", Text),
        field("lastname", "lastname", "Address last name", Text),
        field("address1", "address1", "Address part one", Text),
        field("address2", "address2", "Address part two", Text),
        field("address3", "address3", "Address part three", Text),
        field("postal", "postal", "Address postal code", Text),
        field("city", "city", "Address city", Text),
        field("state", "state", "Address state", Text),
        field("languageid", "langid", "Address language", Text),
        field("countryid", "countryid", "Address country", Text),
        field("telephone", "telephone", "Address telephone", Text),
        field("telefax", "telefax", "Address telefax", Text),
        field("email", "email", "Address email", Text),
        field("website", "website", "Address website", Text),
        field("longitude", "longitude", "Address longitude", Float),
        field("latitude", "latitude", "Address latitude", Float),
        field("birthday", "birthday", "Address birthday", AttributeKind::Date),
        field("position", "pos", "Address position", Integer),
        field("ctime", "ctime", "Address create date/time", Datetime),
        field("mtime", "mtime", "Address modify date/time", Datetime),
        field("editor", "editor", "Address editor", Text),
    ],
    submanagers: &[],
};

pub static LISTS_TABLE: Table = Table {
    path: Some("lists"),
    alias: "mssupli",
    fields: &[
        field("id", "id", "List ID", Integer),
        private("siteid", "siteid", "List site ID", Text),
        private("parentid", "parentid", "List parent ID", Integer),
        private("key", "key", "List key", Text),
        field("type", "type", "List type", Text),
        field("domain", "domain", "List domain", Text),
        field("refid", "refid", "List reference ID", Text),
        field("datestart", "start", "List start date/time", Datetime),
        field("dateend", "end", "List end date/time", Datetime),
        field("config", "config", "List config", Text),
        field("position", "pos", "List position", Integer),
        field("status", "status", "List status", Integer),
        field("ctime", "ctime", "List create date/time", Datetime),
        field("mtime", "mtime", "List modify date/time", Datetime),
        field("editor", "editor", "List editor", Text),
    ],
    submanagers: &["type"],
};

pub static LISTS_TYPE_TABLE: Table = Table {
    path: Some("lists/type"),
    alias: "mssuplity",
    fields: &[
        field("id", "id", "List type ID", Integer),
        private("siteid", "siteid", "List type site ID", Text),
        field("code", "code", "List type code", Text),
        field("domain", "domain", "List type domain", Text),
        field("label", "label", "List type label", Text),
        field("position", "pos", "List type position", Integer),
        field("status", "status", "List type status", Integer),
        field("ctime", "ctime", "List type create date/time", Datetime),
        field("mtime", "mtime", "List type modify date/time", Datetime),
        field("editor", "editor", "List type editor", Text),
    ],
    submanagers: &[],
};

pub static ALL: [&Table; 4] = [&SUPPLIER_TABLE, &ADDRESS_TABLE, &LISTS_TABLE, &LISTS_TYPE_TABLE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_follow_paths() {
        let classes: Vec<String> = ALL.iter().map(|table| table.class().unwrap().to_string()).collect();
        assert_eq!(classes, [
            "Supplier::Manager::Standard",
            "Supplier::Manager::Address::Standard",
            "Supplier::Manager::Lists::Standard",
            "Supplier::Manager::Lists::Type::Standard",
        ]);
    }

    #[test]
    fn class_matches_resolved_location() {
        let location = ManagerLocation::parse("Supplier", Some("Lists/Type")).unwrap();
        let standard = ImplName::try_from("Standard").unwrap();
        assert_eq!(LISTS_TYPE_TABLE.class().unwrap(), location.class(&standard));
    }

    #[test]
    fn attribute_codes_use_table_alias() {
        let attributes = LISTS_TYPE_TABLE.attributes();
        assert_eq!(attributes[0].code, "supplier.lists.type.id");
        assert_eq!(attributes[0].internal_code, "mssuplity.\"id\"");
        assert!(!attributes[1].public);
    }

    #[test]
    fn keys_are_unique_per_table() {
        for table in ALL {
            let mut keys: Vec<_> = table.fields.iter().map(|field| field.key).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), table.fields.len(), "{}", table.code());
        }
    }
}
