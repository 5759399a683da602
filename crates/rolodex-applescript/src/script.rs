//! AppleScript source construction.
//!
//! Every caller-supplied string is passed through [`escape`] before it is
//! interpolated into a script literal; group names and contact names are
//! free text and must be treated as untrusted.

/// Escape untrusted text for a double-quoted AppleScript string literal.
///
/// Backslashes are doubled *before* quotes are escaped (the order matters),
/// then carriage returns and newlines are stripped so a value can neither
/// inject script statements nor terminate the literal early.
pub fn escape(text: &str) -> String {
  text
    .replace('\\', "\\\\")
    .replace('"', "\\\"")
    .replace(['\r', '\n'], "")
}

// ─── Builders ────────────────────────────────────────────────────────────────

pub(crate) fn list_groups() -> String {
  "tell application \"Contacts\"\n  \
     set groupNames to name of every group\n  \
     set AppleScript's text item delimiters to \", \"\n  \
     return groupNames as text\n\
   end tell"
    .to_string()
}

pub(crate) fn create_group(name: &str) -> String {
  let name = escape(name);
  format!(
    "tell application \"Contacts\"\n  \
       if exists group \"{name}\" then\n    \
         return \"exists\"\n  \
       else\n    \
         make new group with properties {{name:\"{name}\"}}\n    \
         save\n    \
         return \"created\"\n  \
       end if\n\
     end tell"
  )
}

pub(crate) fn delete_group(name: &str) -> String {
  let name = escape(name);
  format!(
    "tell application \"Contacts\"\n  \
       if exists group \"{name}\" then\n    \
         delete group \"{name}\"\n    \
         save\n    \
         return \"deleted\"\n  \
       else\n    \
         return \"not_found\"\n  \
       end if\n\
     end tell"
  )
}

pub(crate) fn group_members(name: &str) -> String {
  let name = escape(name);
  format!(
    "tell application \"Contacts\"\n  \
       if not (exists group \"{name}\") then return \"GROUP_NOT_FOUND\"\n  \
       set memberNames to {{}}\n  \
       repeat with aPerson in (get people of group \"{name}\")\n    \
         set personFirst to first name of aPerson\n    \
         set personLast to last name of aPerson\n    \
         if (personFirst is not missing value) and (personLast is not missing value) then\n      \
           set end of memberNames to (personFirst & \" \" & personLast)\n    \
         else if personFirst is not missing value then\n      \
           set end of memberNames to personFirst\n    \
         else if personLast is not missing value then\n      \
           set end of memberNames to personLast\n    \
         else\n      \
           set end of memberNames to \"(unnamed)\"\n    \
         end if\n  \
       end repeat\n  \
       set AppleScript's text item delimiters to \", \"\n  \
       return memberNames as text\n\
     end tell"
  )
}

pub(crate) fn add_to_group(contact_name: &str, group_name: &str) -> String {
  let contact_name = escape(contact_name);
  let group_name = escape(group_name);
  format!(
    "tell application \"Contacts\"\n  \
       set thePerson to first person whose name is \"{contact_name}\"\n  \
       add thePerson to group \"{group_name}\"\n  \
       save\n  \
       return \"added\"\n\
     end tell"
  )
}

pub(crate) fn remove_from_group(contact_name: &str, group_name: &str) -> String {
  let contact_name = escape(contact_name);
  let group_name = escape(group_name);
  format!(
    "tell application \"Contacts\"\n  \
       set thePerson to first person whose name is \"{contact_name}\"\n  \
       remove thePerson from group \"{group_name}\"\n  \
       save\n  \
       return \"removed\"\n\
     end tell"
  )
}

pub(crate) fn export_vcard(contact_name: &str) -> String {
  let contact_name = escape(contact_name);
  format!(
    "tell application \"Contacts\"\n  \
       set thePerson to first person whose name is \"{contact_name}\"\n  \
       return vcard of thePerson\n\
     end tell"
  )
}
