//! Templates bundled with plugkit.
//!
//! Two sets ship with the binary:
//!
//! - **`plugin`** renders the plugin package: pubspec, Dart API, native glue
//!   for each enabled platform, docs and lints.
//! - **`app`** renders the example application under `example/`, which
//!   depends on the plugin through a relative path.
//!
//! Templates only reference keys that every `TemplateContext` carries, so a
//! set renders for any platform selection. Per-platform files are gated with
//! [`Condition`]s; per-platform fragments inside a file use sections.

use plugkit_core::domain::{APP_TEMPLATE, Condition, PLUGIN_TEMPLATE, TemplateFile, TemplateSet};

/// Every bundled template set.
pub fn all_templates() -> Vec<TemplateSet> {
    vec![plugin_template(), app_template()]
}

// ── Plugin package ────────────────────────────────────────────────────────────

pub fn plugin_template() -> TemplateSet {
    let android = || Condition::flag("android");
    let ios = || Condition::flag("ios");

    TemplateSet::new(PLUGIN_TEMPLATE)
        .with_file(TemplateFile::new("pubspec.yaml", PLUGIN_PUBSPEC))
        .with_file(TemplateFile::new("README.md", PLUGIN_README))
        .with_file(TemplateFile::new("CHANGELOG.md", CHANGELOG))
        .with_file(TemplateFile::new("LICENSE", LICENSE))
        .with_file(TemplateFile::new("analysis_options.yaml", ANALYSIS_OPTIONS))
        .with_file(TemplateFile::new(".gitignore", GITIGNORE))
        .with_file(TemplateFile::new(".metadata", PLUGIN_METADATA))
        .with_file(TemplateFile::new("lib/{{projectName}}.dart", PLUGIN_DART))
        .with_file(TemplateFile::new(
            "lib/{{projectName}}_platform_interface.dart",
            PLATFORM_INTERFACE_DART,
        ))
        .with_file(TemplateFile::new(
            "lib/{{projectName}}_method_channel.dart",
            METHOD_CHANNEL_DART,
        ))
        .with_file(
            TemplateFile::new("lib/{{projectName}}_web.dart", WEB_DART).when(Condition::flag("web")),
        )
        .with_file(TemplateFile::new("test/{{projectName}}_test.dart", PLUGIN_TEST_DART))
        // android
        .with_file(TemplateFile::new("android/build.gradle", ANDROID_BUILD_GRADLE).when(android()))
        .with_file(
            TemplateFile::new("android/settings.gradle", ANDROID_SETTINGS_GRADLE).when(android()),
        )
        .with_file(
            TemplateFile::new("android/src/main/AndroidManifest.xml", ANDROID_MANIFEST)
                .when(android()),
        )
        .with_file(
            TemplateFile::new(
                "android/src/main/kotlin/{{androidIdentifier}}/{{pluginClass}}.kt",
                ANDROID_KOTLIN,
            )
            .when(android())
            .when(Condition::equals("androidLanguage", "kotlin")),
        )
        .with_file(
            TemplateFile::new(
                "android/src/main/java/{{androidIdentifier}}/{{pluginClass}}.java",
                ANDROID_JAVA,
            )
            .when(android())
            .when(Condition::equals("androidLanguage", "java")),
        )
        // ios
        .with_file(TemplateFile::new("ios/{{projectName}}.podspec", IOS_PODSPEC).when(ios()))
        .with_file(
            TemplateFile::new("ios/Classes/{{pluginClass}}.swift", IOS_SWIFT)
                .when(ios())
                .when(Condition::equals("iosLanguage", "swift")),
        )
        .with_file(
            TemplateFile::new("ios/Classes/{{pluginClass}}.h", IOS_OBJC_HEADER)
                .when(ios())
                .when(Condition::equals("iosLanguage", "objc")),
        )
        .with_file(
            TemplateFile::new("ios/Classes/{{pluginClass}}.m", IOS_OBJC_IMPL)
                .when(ios())
                .when(Condition::equals("iosLanguage", "objc")),
        )
        // macos
        .with_file(
            TemplateFile::new("macos/{{projectName}}.podspec", MACOS_PODSPEC)
                .when(Condition::flag("macos")),
        )
        .with_file(
            TemplateFile::new("macos/Classes/{{pluginClass}}.swift", MACOS_SWIFT)
                .when(Condition::flag("macos")),
        )
        // linux
        .with_file(
            TemplateFile::new("linux/CMakeLists.txt", LINUX_CMAKE).when(Condition::flag("linux")),
        )
        .with_file(
            TemplateFile::new(
                "linux/include/{{projectName}}/{{projectName}}_plugin.h",
                LINUX_HEADER,
            )
            .when(Condition::flag("linux")),
        )
        .with_file(
            TemplateFile::new("linux/{{projectName}}_plugin.cc", LINUX_SOURCE)
                .when(Condition::flag("linux")),
        )
        // windows
        .with_file(
            TemplateFile::new("windows/CMakeLists.txt", WINDOWS_CMAKE)
                .when(Condition::flag("windows")),
        )
        .with_file(
            TemplateFile::new("windows/{{projectName}}_plugin.h", WINDOWS_HEADER)
                .when(Condition::flag("windows")),
        )
        .with_file(
            TemplateFile::new("windows/{{projectName}}_plugin.cpp", WINDOWS_SOURCE)
                .when(Condition::flag("windows")),
        )
}

const PLUGIN_PUBSPEC: &str = r#"name: {{projectName}}
description: {{description}}
version: 0.0.1
homepage:

environment:
  sdk: ^3.5.0
  flutter: '>=3.3.0'

dependencies:
  flutter:
    sdk: flutter
{{#web}}
  flutter_web_plugins:
    sdk: flutter
  web: ^1.0.0
{{/web}}
  plugin_platform_interface: ^2.0.2

dev_dependencies:
  flutter_test:
    sdk: flutter
  flutter_lints: ^4.0.0

flutter:
  # This section identifies this project as a plugin project.
  # The package and pluginClass identifiers should not ordinarily be
  # modified. They are used by the tooling to keep the platform glue in
  # sync with this manifest.
  plugin:
    platforms:
{{#android}}
      android:
        package: {{androidIdentifier}}
        pluginClass: {{pluginClass}}
{{/android}}
{{#ios}}
      ios:
        pluginClass: {{pluginClass}}
{{/ios}}
{{#linux}}
      linux:
        pluginClass: {{pluginClass}}
{{/linux}}
{{#macos}}
      macos:
        pluginClass: {{pluginClass}}
{{/macos}}
{{#windows}}
      windows:
        pluginClass: {{pluginClass}}
{{/windows}}
{{#web}}
      web:
        pluginClass: {{pluginDartClass}}Web
        fileName: {{projectName}}_web.dart
{{/web}}
{{^hasPlatforms}}
      some_platform:
        pluginClass: somePluginClass
{{/hasPlatforms}}
"#;

const PLUGIN_README: &str = r#"# {{projectName}}

{{description}}

## Getting Started

This project is a starting point for a plugin package: a specialized
package that includes platform-specific implementation code for
{{#android}}Android {{/android}}{{#ios}}iOS {{/ios}}{{#linux}}Linux {{/linux}}{{#macos}}macOS {{/macos}}{{#windows}}Windows {{/windows}}{{#web}}Web {{/web}}{{^hasPlatforms}}no platforms yet{{/hasPlatforms}}.

Add more platforms later with:

```sh
plugkit add-platforms . --platforms <list>
```
"#;

const CHANGELOG: &str = "## 0.0.1\n\n* TODO: Describe initial release.\n";

const LICENSE: &str = r#"Copyright (c) {{year}} {{organization}}

TODO: Put a short description of the license here.
"#;

const ANALYSIS_OPTIONS: &str = "include: package:flutter_lints/flutter.yaml\n";

const GITIGNORE: &str = r#"*.class
*.log
*.pyc
*.swp
.DS_Store
.atom/
.buildlog/
.history
.svn/
migrate_working_dir/

# IntelliJ related
*.iml
*.ipr
*.iws
.idea/

# Flutter/Dart/Pub related
/pubspec.lock
**/doc/api/
.dart_tool/
build/
"#;

const PLUGIN_METADATA: &str = r#"# This file tracks properties of this project.
# Used by the tool to assess capabilities and perform upgrades.
#
# This file should be version controlled and should not be manually edited.

project_type: plugin
project_id: {{projectUUID}}
organization: {{organization}}
android_language: {{androidLanguage}}
ios_language: {{iosLanguage}}
"#;

const PLUGIN_DART: &str = r#"import '{{projectName}}_platform_interface.dart';

class {{pluginDartClass}} {
  Future<String?> getPlatformVersion() {
    return {{pluginDartClass}}Platform.instance.getPlatformVersion();
  }
}
"#;

const PLATFORM_INTERFACE_DART: &str = r#"import 'package:plugin_platform_interface/plugin_platform_interface.dart';

import '{{projectName}}_method_channel.dart';

abstract class {{pluginDartClass}}Platform extends PlatformInterface {
  {{pluginDartClass}}Platform() : super(token: _token);

  static final Object _token = Object();

  static {{pluginDartClass}}Platform _instance = MethodChannel{{pluginDartClass}}();

  /// The default instance of [{{pluginDartClass}}Platform] to use.
  static {{pluginDartClass}}Platform get instance => _instance;

  /// Platform-specific implementations should set this with their own
  /// class that extends [{{pluginDartClass}}Platform] when they register
  /// themselves.
  static set instance({{pluginDartClass}}Platform instance) {
    PlatformInterface.verifyToken(instance, _token);
    _instance = instance;
  }

  Future<String?> getPlatformVersion() {
    throw UnimplementedError('platformVersion() has not been implemented.');
  }
}
"#;

const METHOD_CHANNEL_DART: &str = r#"import 'package:flutter/foundation.dart';
import 'package:flutter/services.dart';

import '{{projectName}}_platform_interface.dart';

/// An implementation of [{{pluginDartClass}}Platform] that uses method channels.
class MethodChannel{{pluginDartClass}} extends {{pluginDartClass}}Platform {
  @visibleForTesting
  final methodChannel = const MethodChannel('{{projectName}}');

  @override
  Future<String?> getPlatformVersion() async {
    final version = await methodChannel.invokeMethod<String>('getPlatformVersion');
    return version;
  }
}
"#;

const WEB_DART: &str = r#"import 'package:flutter_web_plugins/flutter_web_plugins.dart';
import 'package:web/web.dart' as web;

import '{{projectName}}_platform_interface.dart';

/// A web implementation of the {{pluginDartClass}}Platform of the {{pluginDartClass}} plugin.
class {{pluginDartClass}}Web extends {{pluginDartClass}}Platform {
  {{pluginDartClass}}Web();

  static void registerWith(Registrar registrar) {
    {{pluginDartClass}}Platform.instance = {{pluginDartClass}}Web();
  }

  @override
  Future<String?> getPlatformVersion() async {
    return web.window.navigator.userAgent;
  }
}
"#;

const PLUGIN_TEST_DART: &str = r#"import 'package:flutter_test/flutter_test.dart';
import 'package:{{projectName}}/{{projectName}}.dart';
import 'package:{{projectName}}/{{projectName}}_platform_interface.dart';
import 'package:{{projectName}}/{{projectName}}_method_channel.dart';
import 'package:plugin_platform_interface/plugin_platform_interface.dart';

class Mock{{pluginDartClass}}Platform
    with MockPlatformInterfaceMixin
    implements {{pluginDartClass}}Platform {
  @override
  Future<String?> getPlatformVersion() => Future.value('42');
}

void main() {
  final {{pluginDartClass}}Platform initialPlatform = {{pluginDartClass}}Platform.instance;

  test('$MethodChannel{{pluginDartClass}} is the default instance', () {
    expect(initialPlatform, isInstanceOf<MethodChannel{{pluginDartClass}}>());
  });

  test('getPlatformVersion', () async {
    final plugin = {{pluginDartClass}}();
    {{pluginDartClass}}Platform.instance = Mock{{pluginDartClass}}Platform();

    expect(await plugin.getPlatformVersion(), '42');
  });
}
"#;

const ANDROID_BUILD_GRADLE: &str = r#"group = "{{androidIdentifier}}"
version = "1.0-SNAPSHOT"

buildscript {
    repositories {
        google()
        mavenCentral()
    }

    dependencies {
        classpath("com.android.tools.build:gradle:8.1.0")
    }
}

rootProject.allprojects {
    repositories {
        google()
        mavenCentral()
    }
}

apply plugin: "com.android.library"

android {
    namespace = "{{androidIdentifier}}"

    compileSdk = 34

    compileOptions {
        sourceCompatibility = JavaVersion.VERSION_1_8
        targetCompatibility = JavaVersion.VERSION_1_8
    }

    defaultConfig {
        minSdk = 21
    }
}
"#;

const ANDROID_SETTINGS_GRADLE: &str = "rootProject.name = '{{projectName}}'\n";

const ANDROID_MANIFEST: &str = r#"<manifest xmlns:android="http://schemas.android.com/apk/res/android"
  package="{{androidIdentifier}}">
</manifest>
"#;

const ANDROID_KOTLIN: &str = r#"package {{androidIdentifier}}

import io.flutter.embedding.engine.plugins.FlutterPlugin
import io.flutter.plugin.common.MethodCall
import io.flutter.plugin.common.MethodChannel
import io.flutter.plugin.common.MethodChannel.MethodCallHandler
import io.flutter.plugin.common.MethodChannel.Result

/** {{pluginClass}} */
class {{pluginClass}}: FlutterPlugin, MethodCallHandler {
  private lateinit var channel : MethodChannel

  override fun onAttachedToEngine(flutterPluginBinding: FlutterPlugin.FlutterPluginBinding) {
    channel = MethodChannel(flutterPluginBinding.binaryMessenger, "{{projectName}}")
    channel.setMethodCallHandler(this)
  }

  override fun onMethodCall(call: MethodCall, result: Result) {
    if (call.method == "getPlatformVersion") {
      result.success("Android ${android.os.Build.VERSION.RELEASE}")
    } else {
      result.notImplemented()
    }
  }

  override fun onDetachedFromEngine(binding: FlutterPlugin.FlutterPluginBinding) {
    channel.setMethodCallHandler(null)
  }
}
"#;

const ANDROID_JAVA: &str = r#"package {{androidIdentifier}};

import androidx.annotation.NonNull;

import io.flutter.embedding.engine.plugins.FlutterPlugin;
import io.flutter.plugin.common.MethodCall;
import io.flutter.plugin.common.MethodChannel;
import io.flutter.plugin.common.MethodChannel.MethodCallHandler;
import io.flutter.plugin.common.MethodChannel.Result;

/** {{pluginClass}} */
public class {{pluginClass}} implements FlutterPlugin, MethodCallHandler {
  private MethodChannel channel;

  @Override
  public void onAttachedToEngine(@NonNull FlutterPluginBinding flutterPluginBinding) {
    channel = new MethodChannel(flutterPluginBinding.getBinaryMessenger(), "{{projectName}}");
    channel.setMethodCallHandler(this);
  }

  @Override
  public void onMethodCall(@NonNull MethodCall call, @NonNull Result result) {
    if (call.method.equals("getPlatformVersion")) {
      result.success("Android " + android.os.Build.VERSION.RELEASE);
    } else {
      result.notImplemented();
    }
  }

  @Override
  public void onDetachedFromEngine(@NonNull FlutterPluginBinding binding) {
    channel.setMethodCallHandler(null);
  }
}
"#;

const IOS_PODSPEC: &str = r#"Pod::Spec.new do |s|
  s.name             = '{{projectName}}'
  s.version          = '0.0.1'
  s.summary          = '{{description}}'
  s.homepage         = 'http://example.com'
  s.license          = { :file => '../LICENSE' }
  s.author           = { '{{organization}}' => 'email@example.com' }
  s.source           = { :path => '.' }
  s.source_files     = 'Classes/**/*'
  s.dependency 'Flutter'
  s.platform         = :ios, '12.0'
  s.pod_target_xcconfig = { 'DEFINES_MODULE' => 'YES' }
end
"#;

const IOS_SWIFT: &str = r#"import Flutter
import UIKit

public class {{pluginClass}}: NSObject, FlutterPlugin {
  public static func register(with registrar: FlutterPluginRegistrar) {
    let channel = FlutterMethodChannel(name: "{{projectName}}", binaryMessenger: registrar.messenger())
    let instance = {{pluginClass}}()
    registrar.addMethodCallDelegate(instance, channel: channel)
  }

  public func handle(_ call: FlutterMethodCall, result: @escaping FlutterResult) {
    switch call.method {
    case "getPlatformVersion":
      result("iOS " + UIDevice.current.systemVersion)
    default:
      result(FlutterMethodNotImplemented)
    }
  }
}
"#;

const IOS_OBJC_HEADER: &str = r#"#import <Flutter/Flutter.h>

@interface {{pluginClass}} : NSObject<FlutterPlugin>
@end
"#;

const IOS_OBJC_IMPL: &str = r#"#import "{{pluginClass}}.h"

@implementation {{pluginClass}}
+ (void)registerWithRegistrar:(NSObject<FlutterPluginRegistrar>*)registrar {
  FlutterMethodChannel* channel = [FlutterMethodChannel
      methodChannelWithName:@"{{projectName}}"
            binaryMessenger:[registrar messenger]];
  {{pluginClass}}* instance = [[{{pluginClass}} alloc] init];
  [registrar addMethodCallDelegate:instance channel:channel];
}

- (void)handleMethodCall:(FlutterMethodCall*)call result:(FlutterResult)result {
  if ([@"getPlatformVersion" isEqualToString:call.method]) {
    result([@"iOS " stringByAppendingString:[[UIDevice currentDevice] systemVersion]]);
  } else {
    result(FlutterMethodNotImplemented);
  }
}

@end
"#;

const MACOS_PODSPEC: &str = r#"Pod::Spec.new do |s|
  s.name             = '{{projectName}}'
  s.version          = '0.0.1'
  s.summary          = '{{description}}'
  s.homepage         = 'http://example.com'
  s.license          = { :file => '../LICENSE' }
  s.author           = { '{{organization}}' => 'email@example.com' }
  s.source           = { :path => '.' }
  s.source_files     = 'Classes/**/*'
  s.dependency 'FlutterMacOS'
  s.platform = :osx, '10.14'
  s.pod_target_xcconfig = { 'DEFINES_MODULE' => 'YES' }
end
"#;

const MACOS_SWIFT: &str = r#"import Cocoa
import FlutterMacOS

public class {{pluginClass}}: NSObject, FlutterPlugin {
  public static func register(with registrar: FlutterPluginRegistrar) {
    let channel = FlutterMethodChannel(name: "{{projectName}}", binaryMessenger: registrar.messenger)
    let instance = {{pluginClass}}()
    registrar.addMethodCallDelegate(instance, channel: channel)
  }

  public func handle(_ call: FlutterMethodCall, result: @escaping FlutterResult) {
    switch call.method {
    case "getPlatformVersion":
      result("macOS " + ProcessInfo.processInfo.operatingSystemVersionString)
    default:
      result(FlutterMethodNotImplemented)
    }
  }
}
"#;

const LINUX_CMAKE: &str = r#"cmake_minimum_required(VERSION 3.10)

set(PROJECT_NAME "{{projectName}}")
project(${PROJECT_NAME} LANGUAGES CXX)

set(PLUGIN_NAME "{{projectName}}_plugin")

add_library(${PLUGIN_NAME} SHARED
  "{{projectName}}_plugin.cc"
)

apply_standard_settings(${PLUGIN_NAME})
set_target_properties(${PLUGIN_NAME} PROPERTIES
  CXX_VISIBILITY_PRESET hidden)
target_compile_definitions(${PLUGIN_NAME} PRIVATE FLUTTER_PLUGIN_IMPL)
target_include_directories(${PLUGIN_NAME} INTERFACE
  "${CMAKE_CURRENT_SOURCE_DIR}/include")
target_link_libraries(${PLUGIN_NAME} PRIVATE flutter)
target_link_libraries(${PLUGIN_NAME} PRIVATE PkgConfig::GTK)
"#;

const LINUX_HEADER: &str = r#"#ifndef FLUTTER_PLUGIN_{{headerGuardToken}}_PLUGIN_H_
#define FLUTTER_PLUGIN_{{headerGuardToken}}_PLUGIN_H_

#include <flutter_linux/flutter_linux.h>

G_BEGIN_DECLS

#ifdef FLUTTER_PLUGIN_IMPL
#define FLUTTER_PLUGIN_EXPORT __attribute__((visibility("default")))
#else
#define FLUTTER_PLUGIN_EXPORT
#endif

FLUTTER_PLUGIN_EXPORT void {{projectName}}_plugin_register_with_registrar(
    FlPluginRegistrar* registrar);

G_END_DECLS

#endif  // FLUTTER_PLUGIN_{{headerGuardToken}}_PLUGIN_H_
"#;

const LINUX_SOURCE: &str = r#"#include "include/{{projectName}}/{{projectName}}_plugin.h"

#include <flutter_linux/flutter_linux.h>
#include <sys/utsname.h>

#include <cstring>

static void method_call_cb(FlMethodChannel* channel, FlMethodCall* method_call,
                           gpointer user_data) {
  g_autoptr(FlMethodResponse) response = nullptr;
  const gchar* method = fl_method_call_get_name(method_call);

  if (strcmp(method, "getPlatformVersion") == 0) {
    struct utsname uname_data = {};
    uname(&uname_data);
    g_autofree gchar* version = g_strdup_printf("Linux %s", uname_data.version);
    g_autoptr(FlValue) result = fl_value_new_string(version);
    response = FL_METHOD_RESPONSE(fl_method_success_response_new(result));
  } else {
    response = FL_METHOD_RESPONSE(fl_method_not_implemented_response_new());
  }

  fl_method_call_respond(method_call, response, nullptr);
}

void {{projectName}}_plugin_register_with_registrar(FlPluginRegistrar* registrar) {
  g_autoptr(FlStandardMethodCodec) codec = fl_standard_method_codec_new();
  g_autoptr(FlMethodChannel) channel =
      fl_method_channel_new(fl_plugin_registrar_get_messenger(registrar),
                            "{{projectName}}", FL_METHOD_CODEC(codec));
  fl_method_channel_set_method_call_handler(channel, method_call_cb, nullptr, nullptr);
}
"#;

const WINDOWS_CMAKE: &str = r#"cmake_minimum_required(VERSION 3.14)

set(PROJECT_NAME "{{projectName}}")
project(${PROJECT_NAME} LANGUAGES CXX)

set(PLUGIN_NAME "{{projectName}}_plugin")

add_library(${PLUGIN_NAME} SHARED
  "{{projectName}}_plugin.cpp"
  "{{projectName}}_plugin.h"
)

apply_standard_settings(${PLUGIN_NAME})
set_target_properties(${PLUGIN_NAME} PROPERTIES
  CXX_VISIBILITY_PRESET hidden)
target_compile_definitions(${PLUGIN_NAME} PRIVATE FLUTTER_PLUGIN_IMPL)
target_link_libraries(${PLUGIN_NAME} PRIVATE flutter flutter_wrapper_plugin)
"#;

const WINDOWS_HEADER: &str = r#"#ifndef FLUTTER_PLUGIN_{{headerGuardToken}}_PLUGIN_H_
#define FLUTTER_PLUGIN_{{headerGuardToken}}_PLUGIN_H_

#include <flutter/method_channel.h>
#include <flutter/plugin_registrar_windows.h>

#include <memory>

namespace {{projectName}} {

class {{pluginClass}} : public flutter::Plugin {
 public:
  static void RegisterWithRegistrar(flutter::PluginRegistrarWindows *registrar);

  {{pluginClass}}();

  virtual ~{{pluginClass}}();

 private:
  void HandleMethodCall(
      const flutter::MethodCall<flutter::EncodableValue> &method_call,
      std::unique_ptr<flutter::MethodResult<flutter::EncodableValue>> result);
};

}  // namespace {{projectName}}

#endif  // FLUTTER_PLUGIN_{{headerGuardToken}}_PLUGIN_H_
"#;

const WINDOWS_SOURCE: &str = r#"#include "{{projectName}}_plugin.h"

#include <flutter/method_channel.h>
#include <flutter/plugin_registrar_windows.h>
#include <flutter/standard_method_codec.h>

#include <memory>

namespace {{projectName}} {

// static
void {{pluginClass}}::RegisterWithRegistrar(
    flutter::PluginRegistrarWindows *registrar) {
  auto channel =
      std::make_unique<flutter::MethodChannel<flutter::EncodableValue>>(
          registrar->messenger(), "{{projectName}}",
          &flutter::StandardMethodCodec::GetInstance());

  auto plugin = std::make_unique<{{pluginClass}}>();

  channel->SetMethodCallHandler(
      [plugin_pointer = plugin.get()](const auto &call, auto result) {
        plugin_pointer->HandleMethodCall(call, std::move(result));
      });

  registrar->AddPlugin(std::move(plugin));
}

{{pluginClass}}::{{pluginClass}}() {}

{{pluginClass}}::~{{pluginClass}}() {}

void {{pluginClass}}::HandleMethodCall(
    const flutter::MethodCall<flutter::EncodableValue> &method_call,
    std::unique_ptr<flutter::MethodResult<flutter::EncodableValue>> result) {
  if (method_call.method_name().compare("getPlatformVersion") == 0) {
    result->Success(flutter::EncodableValue("Windows"));
  } else {
    result->NotImplemented();
  }
}

}  // namespace {{projectName}}
"#;

// ── Example application ───────────────────────────────────────────────────────

pub fn app_template() -> TemplateSet {
    TemplateSet::new(APP_TEMPLATE)
        .with_file(TemplateFile::new("pubspec.yaml", APP_PUBSPEC))
        .with_file(TemplateFile::new("README.md", APP_README))
        .with_file(TemplateFile::new(".gitignore", GITIGNORE))
        .with_file(TemplateFile::new(".metadata", APP_METADATA))
        .with_file(TemplateFile::new("analysis_options.yaml", ANALYSIS_OPTIONS))
        .with_file(TemplateFile::new("lib/main.dart", APP_MAIN_DART))
        .with_file(
            TemplateFile::new("integration_test/plugin_integration_test.dart", APP_INTEGRATION_TEST)
                .when(Condition::flag("withDriverTest")),
        )
        .with_file(
            TemplateFile::new("android/app/build.gradle", APP_ANDROID_BUILD_GRADLE)
                .when(Condition::flag("android")),
        )
        .with_file(
            TemplateFile::new("android/local.properties", APP_ANDROID_LOCAL_PROPERTIES)
                .when(Condition::flag("android")),
        )
        .with_file(
            TemplateFile::new("ios/Flutter/Generated.xcconfig", APP_IOS_XCCONFIG)
                .when(Condition::flag("ios")),
        )
        .with_file(
            TemplateFile::new("macos/Runner/Configs/AppInfo.xcconfig", APP_MACOS_XCCONFIG)
                .when(Condition::flag("macos")),
        )
        .with_file(
            TemplateFile::new("linux/CMakeLists.txt", APP_LINUX_CMAKE)
                .when(Condition::flag("linux")),
        )
        .with_file(
            TemplateFile::new("windows/CMakeLists.txt", APP_WINDOWS_CMAKE)
                .when(Condition::flag("windows")),
        )
        .with_file(
            TemplateFile::new("web/index.html", APP_WEB_INDEX).when(Condition::flag("web")),
        )
}

const APP_PUBSPEC: &str = r#"name: {{projectName}}
description: "{{description}}"
publish_to: 'none'

environment:
  sdk: ^3.5.0

dependencies:
  flutter:
    sdk: flutter

  {{pluginProjectName}}:
    # When depending on this package from a real application you should use:
    #   {{pluginProjectName}}: ^x.y.z
    # The example app is bundled with the plugin so we use a path dependency on
    # the parent directory to use the current plugin's version.
    path: ../

dev_dependencies:
{{#withDriverTest}}
  integration_test:
    sdk: flutter
{{/withDriverTest}}
  flutter_test:
    sdk: flutter
  flutter_lints: ^4.0.0

flutter:
  uses-material-design: true
"#;

const APP_README: &str = r#"# {{projectName}}

{{description}}
"#;

const APP_METADATA: &str = r#"# This file tracks properties of this project.
# Used by the tool to assess capabilities and perform upgrades.
#
# This file should be version controlled and should not be manually edited.

project_type: app
project_id: {{projectUUID}}
"#;

const APP_MAIN_DART: &str = r#"import 'package:flutter/material.dart';
import 'dart:async';

import 'package:flutter/services.dart';
import 'package:{{pluginProjectName}}/{{pluginProjectName}}.dart';

void main() {
  runApp(const MyApp());
}

class MyApp extends StatefulWidget {
  const MyApp({super.key});

  @override
  State<MyApp> createState() => _MyAppState();
}

class _MyAppState extends State<MyApp> {
  String _platformVersion = 'Unknown';
  final _plugin = {{pluginProjectDartClass}}();

  @override
  void initState() {
    super.initState();
    initPlatformState();
  }

  Future<void> initPlatformState() async {
    String platformVersion;
    try {
      platformVersion =
          await _plugin.getPlatformVersion() ?? 'Unknown platform version';
    } on PlatformException {
      platformVersion = 'Failed to get platform version.';
    }

    if (!mounted) return;

    setState(() {
      _platformVersion = platformVersion;
    });
  }

  @override
  Widget build(BuildContext context) {
    return MaterialApp(
      home: Scaffold(
        appBar: AppBar(
          title: const Text('Plugin example app'),
        ),
        body: Center(
          child: Text('Running on: $_platformVersion\n'),
        ),
      ),
    );
  }
}
"#;

const APP_INTEGRATION_TEST: &str = r#"import 'package:flutter_test/flutter_test.dart';
import 'package:integration_test/integration_test.dart';

import 'package:{{pluginProjectName}}/{{pluginProjectName}}.dart';

void main() {
  IntegrationTestWidgetsFlutterBinding.ensureInitialized();

  testWidgets('getPlatformVersion test', (WidgetTester tester) async {
    final {{pluginProjectDartClass}} plugin = {{pluginProjectDartClass}}();
    final String? version = await plugin.getPlatformVersion();
    expect(version?.isNotEmpty, true);
  });
}
"#;

const APP_ANDROID_BUILD_GRADLE: &str = r#"plugins {
    id "com.android.application"
    id "dev.flutter.flutter-gradle-plugin"
}

android {
    namespace = "{{androidIdentifier}}"
    compileSdk = 34

    defaultConfig {
        applicationId = "{{androidIdentifier}}"
        minSdk = 21
        targetSdk = 34
        versionCode = 1
        versionName = "1.0"
    }
}

flutter {
    source = "../.."
}
"#;

const APP_ANDROID_LOCAL_PROPERTIES: &str = "flutter.sdk={{toolRoot}}\n";

const APP_IOS_XCCONFIG: &str = r#"FLUTTER_ROOT={{toolRoot}}
FLUTTER_APPLICATION_PATH=..
PRODUCT_BUNDLE_IDENTIFIER={{iosIdentifier}}
"#;

const APP_MACOS_XCCONFIG: &str = r#"// Application-level settings for the Runner target.

PRODUCT_NAME = {{projectName}}

PRODUCT_BUNDLE_IDENTIFIER = {{macosIdentifier}}

PRODUCT_COPYRIGHT = Copyright © {{year}} {{organization}}. All rights reserved.
"#;

const APP_LINUX_CMAKE: &str = r#"cmake_minimum_required(VERSION 3.13)
project(runner LANGUAGES CXX)

set(BINARY_NAME "{{projectName}}")
set(APPLICATION_ID "{{androidIdentifier}}")

cmake_policy(SET CMP0063 NEW)

set(CMAKE_INSTALL_RPATH "$ORIGIN/lib")
"#;

const APP_WINDOWS_CMAKE: &str = r#"cmake_minimum_required(VERSION 3.14)
project({{projectName}} LANGUAGES CXX)

set(BINARY_NAME "{{projectName}}")
set(PROJECT_GUID "{{projectUUID}}")

cmake_policy(VERSION 3.14...3.25)
"#;

const APP_WEB_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head>
  <base href="$FLUTTER_BASE_HREF">
  <meta charset="UTF-8">
  <meta name="description" content="{{description}}">
  <title>{{projectName}}</title>
  <link rel="manifest" href="manifest.json">
</head>
<body>
  <script src="flutter_bootstrap.js" async></script>
</body>
</html>
"#;
