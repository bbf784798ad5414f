#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

/// A parsed user command. This is the only way intent enters the session,
/// keeping the core logic independent of how input is collected.
pub struct Command {
    command: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn parse(text: &str) -> Option<Command> {
        let mut args = text
            .trim()
            .split(' ')
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        let prefix = args[0].to_string();
        args.remove(0);

        let cmd = Command {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_help()
            || cmd.is_new()
            || cmd.is_open()
            || cmd.is_list()
            || cmd.is_generate()
            || cmd.is_refine()
            || cmd.is_done()
            || cmd.is_model_list()
            || cmd.is_model_set()
        {
            return Some(cmd);
        }

        return None;
    }

    /// Remaining words joined back together, for commands that take free
    /// text such as `/refine`.
    pub fn text(&self) -> String {
        return self.args.join(" ");
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_new(&self) -> bool {
        return ["/n", "/new"].contains(&self.command.as_str());
    }

    pub fn is_open(&self) -> bool {
        return ["/o", "/open"].contains(&self.command.as_str());
    }

    pub fn is_list(&self) -> bool {
        return ["/l", "/list"].contains(&self.command.as_str());
    }

    pub fn is_generate(&self) -> bool {
        return ["/g", "/generate"].contains(&self.command.as_str());
    }

    pub fn is_refine(&self) -> bool {
        return ["/r", "/refine"].contains(&self.command.as_str());
    }

    pub fn is_done(&self) -> bool {
        return ["/d", "/done"].contains(&self.command.as_str());
    }

    pub fn is_model_list(&self) -> bool {
        return ["/ml", "/models", "/modellist"].contains(&self.command.as_str());
    }

    pub fn is_model_set(&self) -> bool {
        return ["/m", "/model"].contains(&self.command.as_str());
    }
}
