use crate::AntProject;
use crate::xml::escape;
use gavfind_types::ArtifactIdentity;

const TASKS_JAR_PATH: &str = "/repository/maven-public/org/apache/maven/maven-ant-tasks/${maven.ant.tasks.jar.version}/${maven.ant.tasks.jar}";

/// Render a `build.xml` that fetches maven-ant-tasks, resolves the dependencies,
/// and moves the jars into `libs/`.
pub fn render_ant(dependencies: &[ArtifactIdentity], project: &AntProject) -> String {
    let mut lines: Vec<String> = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        format!(
            r#"<project name="{}" default="download-dependencies" xmlns:artifact="urn:maven-artifact-ant">"#,
            escape(&project.name)
        ),
        format!(
            r#"	<property name="maven.ant.tasks.jar.version" value="{}" />"#,
            escape(&project.tasks_version)
        ),
        r#"	<property name="maven.ant.tasks.jar" value="maven-ant-tasks-${maven.ant.tasks.jar.version}.jar" />"#.to_string(),
        r#"	<property name="maven.settings.file" value="${user.home}/.m2/settings.xml" />"#.to_string(),
        r#"	<target name="init-maven-task" depends="obtain-maven-task-jar">"#.to_string(),
        r#"		<available property="maven.ant.tasks.jar.exists" file="${maven.ant.tasks.jar}" />"#.to_string(),
        r#"		<typedef resource="org/apache/maven/artifact/ant/antlib.xml" uri="urn:maven-artifact-ant" classpath="${maven.ant.tasks.jar}" />"#.to_string(),
        "	</target>".to_string(),
        r#"	<target name="obtain-maven-task-jar">"#.to_string(),
        r#"		<available property="maven.ant.tasks.jar.exists" file="${maven.ant.tasks.jar}" />"#.to_string(),
        r#"		<antcall target="download-maven-jar" />"#.to_string(),
        "	</target>".to_string(),
        r#"	<target name="download-maven-jar" unless="maven.ant.tasks.jar.exists">"#.to_string(),
        format!(
            r#"		<property name="maven.ant.tasks.url" value="{}{}" />"#,
            escape(project.nexus_url.trim_end_matches('/')),
            TASKS_JAR_PATH
        ),
        r#"		<get src="${maven.ant.tasks.url}" dest="${maven.ant.tasks.jar}" />"#.to_string(),
        "	</target>".to_string(),
        r#"	<target name="download-dependencies" depends="init-maven-task">"#.to_string(),
        r#"		<artifact:dependencies pathId="dependencies.classpath" settingsFile="${maven.settings.file}">"#.to_string(),
    ];

    for dep in dependencies {
        lines.push(format!(
            r#"			<dependency groupId="{}" artifactId="{}" version="{}" />"#,
            escape(&dep.group_id),
            escape(&dep.artifact_id),
            escape(&dep.version)
        ));
    }

    lines.extend(
        [
            "		</artifact:dependencies>",
            r#"		<move todir="libs">"#,
            r#"			<path refid="dependencies.classpath" />"#,
            "		</move>",
            "	</target>",
            "</project>",
        ]
        .map(str::to_string),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_one_dependency_element_per_identity() {
        let deps = vec![
            ArtifactIdentity::new("junit", "junit", "4.12"),
            ArtifactIdentity::new("commons-io", "commons-io", "2.6"),
        ];
        let xml = render_ant(&deps, &AntProject::default());

        assert!(xml.contains(
            "\t\t\t<dependency groupId=\"junit\" artifactId=\"junit\" version=\"4.12\" />\n"
        ));
        assert!(xml.contains(
            "\t\t\t<dependency groupId=\"commons-io\" artifactId=\"commons-io\" version=\"2.6\" />\n"
        ));
        assert_eq!(xml.matches("<dependency ").count(), 2);
        assert!(xml.ends_with("</project>\n"));
    }

    #[test]
    fn tasks_jar_is_fetched_from_configured_nexus() {
        let project = AntProject {
            nexus_url: "https://nexus.example.com/".to_string(),
            tasks_version: "2.1.4".to_string(),
            ..AntProject::default()
        };
        let xml = render_ant(&[], &project);

        assert!(xml.contains(
            "value=\"https://nexus.example.com/repository/maven-public/org/apache/maven/maven-ant-tasks/${maven.ant.tasks.jar.version}/${maven.ant.tasks.jar}\""
        ));
        assert!(xml.contains("<property name=\"maven.ant.tasks.jar.version\" value=\"2.1.4\" />"));
        assert!(!xml.contains("<dependency "));
    }
}
