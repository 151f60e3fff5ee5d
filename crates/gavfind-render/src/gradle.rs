use crate::GradleProject;
use gavfind_types::ArtifactIdentity;

/// Gradle string literals are single-quoted; escape backslashes and quotes.
fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

pub fn render_gradle(dependencies: &[ArtifactIdentity], project: &GradleProject) -> String {
    let mut out = String::new();

    out.push_str("apply plugin: 'java'\n");
    out.push_str("apply plugin: 'eclipse'\n");
    out.push_str("apply plugin: 'idea'\n");
    out.push_str(&format!("group = '{}'\n", quote(&project.group)));
    out.push_str(&format!("version = '{}'\n", quote(&project.version)));
    out.push('\n');

    if !dependencies.is_empty() {
        out.push_str("dependencies {\n");
        for dep in dependencies {
            out.push_str(&format!(
                "    {} group: '{}', name: '{}', version: '{}'\n",
                project.configuration,
                quote(&dep.group_id),
                quote(&dep.artifact_id),
                quote(&dep.version)
            ));
        }
        out.push_str("}\n");
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plugins_and_dependencies() {
        let deps = vec![ArtifactIdentity::new("junit", "junit", "4.12")];
        let gradle = render_gradle(&deps, &GradleProject::default());

        assert_eq!(
            gradle,
            "apply plugin: 'java'\n\
             apply plugin: 'eclipse'\n\
             apply plugin: 'idea'\n\
             group = 'com.bcs.gradle.test'\n\
             version = '1.0.0-SNAPSHOT'\n\
             \n\
             dependencies {\n\
             \x20   compile group: 'junit', name: 'junit', version: '4.12'\n\
             }\n\
             \n"
        );
    }

    #[test]
    fn empty_list_omits_dependencies_block() {
        let gradle = render_gradle(&[], &GradleProject::default());
        assert!(!gradle.contains("dependencies"));
        assert!(gradle.ends_with("version = '1.0.0-SNAPSHOT'\n\n\n"));
    }

    #[test]
    fn configuration_and_quotes_are_honored() {
        let project = GradleProject {
            configuration: "implementation".to_string(),
            ..GradleProject::default()
        };
        let deps = vec![ArtifactIdentity::new("o'reilly", "a", "1")];
        let gradle = render_gradle(&deps, &project);
        assert!(gradle.contains("    implementation group: 'o\\'reilly', name: 'a', version: '1'\n"));
    }
}
